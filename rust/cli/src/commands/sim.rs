use crate::config::{Config, Overrides};
use crate::error::CliError;
use guozha_ai::autoplay::{DEFAULT_MAX_STEPS, run_game};
use guozha_engine::config::GameMode;
use guozha_engine::errors::GameError;
use guozha_engine::events::GameEvent;
use guozha_engine::game::GameState;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub games: usize,
    pub players: Option<usize>,
    pub mode: Option<GameMode>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
}

/// Aggregate results of a simulation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub games: usize,
    pub rounds: u64,
    pub piles: u64,
    /// Games won (highest final score) per seat
    pub wins: Vec<usize>,
}

impl SimSummary {
    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.rounds as f64 / self.games as f64
        }
    }
}

/// Points entered into the game by the start scores and every awarded pot
/// must equal the sum of the final scores.
fn check_conservation(state: &GameState) -> Result<(), GameError> {
    let start: i64 = state.config().starting_score * state.player_count() as i64;
    let pots: i64 = state
        .round_history()
        .iter()
        .map(|r| i64::from(r.total_pot))
        .sum();
    if state.total_score() != start + pots {
        return Err(GameError::InvariantViolation(format!(
            "score total {} differs from start {} plus pots {}",
            state.total_score(),
            start,
            pots
        )));
    }
    state.check_invariants()
}

/// Plays `games` seeded games; game `g` uses `seed + g`.
pub fn simulate(games: usize, config: &Config, seed: u64) -> Result<SimSummary, CliError> {
    let mut summary = SimSummary {
        games: 0,
        rounds: 0,
        piles: 0,
        wins: vec![0; config.players],
    };
    for game in 0..games {
        let game_seed = seed.wrapping_add(game as u64);
        let state = GameState::deal(config.game_config(), game_seed)?;
        let ais = super::seat_ais(&config.ai, config.players, game_seed)?;
        let mut events: Vec<GameEvent> = Vec::new();
        let run = run_game(state, &ais, DEFAULT_MAX_STEPS, &mut events)?;
        check_conservation(&run.state)?;

        summary.games += 1;
        summary.rounds += run.state.round_history().len() as u64;
        summary.piles += run
            .state
            .players()
            .iter()
            .map(|p| u64::from(p.piles_played()))
            .sum::<u64>();
        if let Some(winner) = run.state.standings().and_then(|s| s.winner()) {
            summary.wins[winner] += 1;
        }
        debug!(
            game,
            seed = game_seed,
            steps = run.steps,
            events = events.len(),
            "game simulated"
        );
    }
    Ok(summary)
}

pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.games == 0 {
        return Err(CliError::InvalidInput("games must be at least 1".into()));
    }
    let overrides = Overrides {
        players: opts.players,
        mode: opts.mode,
        seed: opts.seed,
        ai: opts.ai.clone(),
    };
    let (resolved, seed) = super::resolve(&overrides)?;
    let config = resolved.config;
    info!(games = opts.games, seed, "starting simulation");

    let summary = simulate(opts.games, &config, seed)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Games: {}", summary.games)?;
    writeln!(out, "Average rounds: {:.2}", summary.average_rounds())?;
    writeln!(out, "Piles played: {}", summary.piles)?;
    for (seat, wins) in summary.wins.iter().enumerate() {
        writeln!(out, "Seat {} wins: {}", seat, wins)?;
    }
    Ok(())
}
