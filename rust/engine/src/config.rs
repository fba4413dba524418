use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::TeamId;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
/// Score every seat starts from unless configured otherwise.
pub const DEFAULT_STARTING_SCORE: i64 = -100;

/// Individual play or two alternating-seat teams.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Individual,
    Team,
}

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Individual => "individual",
            GameMode::Team => "team",
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" | "solo" => Ok(GameMode::Individual),
            "team" | "teams" => Ok(GameMode::Team),
            other => Err(GameError::InvalidSetup(format!("unknown game mode '{other}'"))),
        }
    }
}

/// Table configuration, fixed for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats at the table; one 54-card deck is dealt per seat
    pub player_count: usize,
    pub mode: GameMode,
    /// Score each seat starts the game with
    pub starting_score: i64,
    /// Seat that opens the first round
    pub first_player: usize,
    /// Debug mode: player views expose every hand
    pub perfect_information: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            mode: GameMode::Individual,
            starting_score: DEFAULT_STARTING_SCORE,
            first_player: 0,
            perfect_information: false,
        }
    }
}

impl GameConfig {
    pub fn individual(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    pub fn team(player_count: usize) -> Self {
        Self {
            player_count,
            mode: GameMode::Team,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidSetup(format!(
                "player_count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if self.mode == GameMode::Team && (self.player_count < 4 || self.player_count % 2 != 0) {
            return Err(GameError::InvalidSetup(format!(
                "team mode needs an even player_count of at least 4, got {}",
                self.player_count
            )));
        }
        if self.first_player >= self.player_count {
            return Err(GameError::InvalidSetup(format!(
                "first_player {} is not a seat at a table of {}",
                self.first_player, self.player_count
            )));
        }
        Ok(())
    }

    /// Team of a seat in team mode: seats alternate between team 0 and team 1.
    pub fn team_of(&self, seat: usize) -> Option<TeamId> {
        match self.mode {
            GameMode::Individual => None,
            GameMode::Team => Some(seat % 2),
        }
    }

    pub fn team_members(&self, team: TeamId) -> Vec<usize> {
        (0..self.player_count)
            .filter(|&seat| self.team_of(seat) == Some(team))
            .collect()
    }
}
