//! The `cfg` command: prints the resolved configuration with the source of
//! each value (default, file or environment) as JSON.

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "mode": {
            "value": config.mode,
            "source": sources.mode,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "starting_score": {
            "value": config.starting_score,
            "source": sources.starting_score,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
    });
    let text = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", text)?;
    Ok(())
}
