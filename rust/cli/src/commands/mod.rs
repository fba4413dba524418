//! Subcommand handlers. Each returns `Result<(), CliError>`; `run` maps errors to exit code 2.

mod cfg;
mod play;
mod rules;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::{PlayOptions, handle_play_command};
pub use rules::{handle_beats_command, handle_classify_command};
pub use sim::{SimOptions, SimSummary, handle_sim_command, simulate};

use crate::config::{self, ConfigResolved, Overrides};
use crate::error::CliError;
use guozha_ai::{AiPlayer, create_seeded_ai};

/// Resolves the configuration and fills in a seed when none was configured.
fn resolve(overrides: &Overrides) -> Result<(ConfigResolved, u64), CliError> {
    let resolved = config::load_with_overrides(overrides)?;
    let seed = resolved.config.seed.unwrap_or_else(rand::random);
    Ok((resolved, seed))
}

/// One AI per seat, each drawing from its own seed stream.
fn seat_ais(ai: &str, players: usize, seed: u64) -> Result<Vec<Box<dyn AiPlayer>>, CliError> {
    (0..players)
        .map(|seat| {
            create_seeded_ai(ai, seed.wrapping_add(seat as u64))
                .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{ai}'")))
        })
        .collect()
}
