//! Terminal output helpers shared by the subcommands.

use guozha_engine::cards::format_cards;
use guozha_engine::events::GameEvent;
use guozha_engine::finish::GameEnd;
use guozha_engine::ranking::Standings;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// One human-readable line per event.
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted {
            player_count,
            mode,
            first_player,
        } => format!(
            "Game started: {} players, {} mode, seat {} opens",
            player_count,
            mode.as_str(),
            first_player
        ),
        GameEvent::PlaySubmitted {
            player,
            combination,
            pot_contribution,
            opened,
        } => format!(
            "Seat {} {} {} [{}] (+{} to pot)",
            player,
            if *opened { "opens with" } else { "plays" },
            combination,
            format_cards(combination.cards()),
            pot_contribution
        ),
        GameEvent::SidePaymentApplied {
            player,
            multiplier,
            gain,
            loss_each,
        } => format!(
            "Seat {} collects {} for a pile (x{}), others pay {} each",
            player, gain, multiplier, loss_each
        ),
        GameEvent::Passed { player } => format!("Seat {} passes", player),
        GameEvent::RoundResolved { record } => format!(
            "Round {} won by seat {} (pot {})",
            record.round_number, record.winner, record.total_pot
        ),
        GameEvent::PlayerFinished { player, position } => {
            format!("Seat {} is out of cards (place {})", player, position + 1)
        }
        GameEvent::RemainderTransferred { from, to, points } => format!(
            "Seat {} hands {} unplayed points to seat {}",
            from, points, to
        ),
        GameEvent::GameEnded { reason, .. } => match reason {
            GameEnd::LastHolder { player } => {
                format!("Game over: seat {} is the last holder", player)
            }
            GameEnd::TeamSweep { team } => format!("Game over: team {} went out first", team),
        },
    }
}

/// Final standings table, ranked by score.
pub fn write_standings(out: &mut dyn Write, standings: &Standings) -> std::io::Result<()> {
    writeln!(out, "Rank  Seat  Finish  Cards  Score")?;
    for s in &standings.by_score {
        writeln!(
            out,
            "{:>4}  {:>4}  {:>6}  {:>5}  {:>5}",
            s.score_rank, s.player, s.finish_rank, s.hand_size, s.final_score
        )?;
    }
    for team in &standings.teams {
        let members: Vec<String> = team.members.iter().map(|m| m.to_string()).collect();
        writeln!(
            out,
            "Team {} (seats {}): {} [rank {}]",
            team.team,
            members.join(", "),
            team.score,
            team.rank
        )?;
    }
    Ok(())
}
