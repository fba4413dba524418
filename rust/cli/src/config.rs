use guozha_engine::config::{DEFAULT_STARTING_SCORE, GameConfig, GameMode};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "GUOZHA_CONFIG";
pub const PLAYERS_ENV: &str = "GUOZHA_PLAYERS";
pub const MODE_ENV: &str = "GUOZHA_MODE";
pub const SEED_ENV: &str = "GUOZHA_SEED";
pub const STARTING_SCORE_ENV: &str = "GUOZHA_STARTING_SCORE";
pub const AI_ENV: &str = "GUOZHA_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub mode: GameMode,
    pub seed: Option<u64>,
    pub starting_score: i64,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub mode: ValueSource,
    pub seed: ValueSource,
    pub starting_score: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            mode: ValueSource::Default,
            seed: ValueSource::Default,
            starting_score: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            mode: GameMode::Individual,
            seed: None,
            starting_score: DEFAULT_STARTING_SCORE,
            ai: "baseline".into(),
        }
    }
}

impl Config {
    /// Engine configuration for one table.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            player_count: self.players,
            mode: self.mode,
            starting_score: self.starting_score,
            ..GameConfig::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub players: Option<usize>,
    pub mode: Option<GameMode>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&Overrides::default())
}

/// Resolves configuration: defaults, then the TOML file named by
/// `GUOZHA_CONFIG`, then `GUOZHA_*` variables, then command-line overrides.
pub fn load_with_overrides(overrides: &Overrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.mode {
            cfg.mode = v;
            sources.mode = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.starting_score {
            cfg.starting_score = v;
            sources.starting_score = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_value(PLAYERS_ENV) {
        cfg.players = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {PLAYERS_ENV}: {v}")))?;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_value(MODE_ENV) {
        cfg.mode = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {MODE_ENV}: {v}")))?;
        sources.mode = ValueSource::Env;
    }
    if let Some(v) = env_value(SEED_ENV) {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {SEED_ENV}: {v}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(STARTING_SCORE_ENV) {
        cfg.starting_score = v
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {STARTING_SCORE_ENV}: {v}")))?;
        sources.starting_score = ValueSource::Env;
    }
    if let Some(v) = env_value(AI_ENV) {
        cfg.ai = v;
        sources.ai = ValueSource::Env;
    }

    if let Some(v) = overrides.players {
        cfg.players = v;
        sources.players = ValueSource::Flag;
    }
    if let Some(v) = overrides.mode {
        cfg.mode = v;
        sources.mode = ValueSource::Flag;
    }
    if let Some(v) = overrides.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Flag;
    }
    if let Some(v) = &overrides.ai {
        cfg.ai = v.clone();
        sources.ai = ValueSource::Flag;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    mode: Option<GameMode>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    starting_score: Option<i64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.game_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {e}")))?;
    if guozha_ai::create_ai(&cfg.ai).is_none() {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            guozha_ai::AI_TYPES.join(", ")
        )));
    }
    Ok(())
}
