use crate::config::Overrides;
use crate::error::CliError;
use crate::ui;
use guozha_ai::autoplay::{DEFAULT_MAX_STEPS, run_game};
use guozha_engine::config::GameMode;
use guozha_engine::events::{EventSink, GameEvent};
use guozha_engine::game::GameState;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub players: Option<usize>,
    pub mode: Option<GameMode>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub json: bool,
}

/// Writes each event as it happens. The first write failure is kept and
/// reported once the game is over.
struct EventPrinter<'a> {
    out: &'a mut dyn Write,
    json: bool,
    failure: Option<std::io::Error>,
}

impl EventPrinter<'_> {
    fn write_event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        if self.json {
            let line = serde_json::to_string(event).map_err(std::io::Error::other)?;
            writeln!(self.out, "{}", line)
        } else {
            writeln!(self.out, "{}", ui::describe_event(event))
        }
    }
}

impl EventSink for EventPrinter<'_> {
    fn on_event(&mut self, event: &GameEvent) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = self.write_event(event) {
            self.failure = Some(e);
        }
    }
}

/// Plays one AI-only game and prints its events and final standings.
pub fn handle_play_command(
    opts: &PlayOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let overrides = Overrides {
        players: opts.players,
        mode: opts.mode,
        seed: opts.seed,
        ai: opts.ai.clone(),
    };
    let (resolved, seed) = super::resolve(&overrides)?;
    let config = resolved.config;
    info!(seed, players = config.players, mode = config.mode.as_str(), "dealing game");

    let state = GameState::deal(config.game_config(), seed)?;
    let ais = super::seat_ais(&config.ai, config.players, seed)?;

    if !opts.json {
        writeln!(out, "Seed: {}", seed)?;
    }
    let mut printer = EventPrinter {
        out: &mut *out,
        json: opts.json,
        failure: None,
    };
    let run = run_game(state, &ais, DEFAULT_MAX_STEPS, &mut printer)?;
    if let Some(e) = printer.failure {
        return Err(e.into());
    }

    if !opts.json
        && let Some(standings) = run.state.standings()
    {
        writeln!(out)?;
        ui::write_standings(out, standings)?;
    }
    Ok(())
}
