use clap::{Parser, Subcommand, ValueEnum};
use guozha_engine::config::GameMode;

#[derive(Parser, Debug)]
#[command(
    name = "guozha",
    author,
    version,
    about = "Guozha card game: rule engine, AI tables and rule checks"
)]
pub struct GuozhaCli {
    /// Increase log verbosity (-v engine debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game between AI seats and print every event
    Play {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
        /// Print events as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Simulate many games and report aggregate results
    Sim {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Inspect the combination rules
    Rules {
        #[command(subcommand)]
        cmd: RulesCommand,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// Classify a set of ranks, e.g. `rules classify 5 5 5 5`
    Classify {
        #[arg(required = true)]
        ranks: Vec<String>,
    },
    /// Check whether one combination beats another
    Beats {
        /// Ranks of the challenging play, e.g. "2,2"
        #[arg(long)]
        challenger: String,
        /// Ranks of the play on the table
        #[arg(long)]
        incumbent: String,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    Individual,
    Team,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Individual => GameMode::Individual,
            ModeArg::Team => GameMode::Team,
        }
    }
}
