//! # Guozha CLI Library
//!
//! Command-line front end for the Guozha rule engine: AI-only games with a
//! running event log, batch simulations, and rule lookups.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["guozha", "rules", "classify", "5", "5", "5", "5"];
//! let code = guozha_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Bomb"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game between AI seats and print every event
//! - `sim`: Simulate many seeded games and report aggregate results
//! - `rules classify` / `rules beats`: Inspect combination rules
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod logging;
pub mod ui;

use cli::{Commands, GuozhaCli, RulesCommand};
use commands::{
    PlayOptions, SimOptions, handle_beats_command, handle_cfg_command, handle_classify_command,
    handle_play_command, handle_sim_command,
};

pub use commands::{SimSummary, simulate};
pub use error::CliError;

/// Parses `args` and runs the selected subcommand.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for usage and runtime errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "rules", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GuozhaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    let _ = write_usage(err, &e, COMMANDS);
                    2
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Play {
            players,
            mode,
            seed,
            ai,
            json,
        } => {
            let opts = PlayOptions {
                players,
                mode: mode.map(Into::into),
                seed,
                ai,
                json,
            };
            handle_play_command(&opts, out)
        }
        Commands::Sim {
            games,
            players,
            mode,
            seed,
            ai,
        } => {
            let opts = SimOptions {
                games,
                players,
                mode: mode.map(Into::into),
                seed,
                ai,
            };
            handle_sim_command(&opts, out)
        }
        Commands::Rules { cmd } => match cmd {
            RulesCommand::Classify { ranks } => handle_classify_command(&ranks, out),
            RulesCommand::Beats {
                challenger,
                incumbent,
            } => handle_beats_command(&challenger, &incumbent, out),
        },
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn write_usage(err: &mut dyn Write, e: &clap::Error, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Guozha CLI")?;
    writeln!(err, "Usage: guozha <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: guozha --help")
}
