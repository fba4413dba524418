use serde::{Deserialize, Serialize};

use crate::config::GameMode;
use crate::errors::GameError;
use crate::player::{Player, TeamId};

/// Order in which players emptied their hands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishTracker {
    order: Vec<usize>,
}

impl FinishTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 0-based finishing position of a player, if placed.
    pub fn position_of(&self, player: usize) -> Option<usize> {
        self.order.iter().position(|&p| p == player)
    }

    /// Appends a player who just emptied their hand and returns their 0-based
    /// position. Recording a player twice is an engine bug.
    pub(crate) fn record(&mut self, player: usize) -> Result<usize, GameError> {
        if self.position_of(player).is_some() {
            return Err(GameError::InvariantViolation(format!(
                "player {player} recorded in the finish order twice"
            )));
        }
        self.order.push(player);
        Ok(self.order.len() - 1)
    }

    /// Places the players still holding cards after the game ended.
    pub(crate) fn complete_with(&mut self, remaining: &[usize]) -> Result<(), GameError> {
        for &player in remaining {
            self.record(player)?;
        }
        Ok(())
    }
}

/// Why the game ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEnd {
    /// Individual mode: a single player still holds cards
    LastHolder { player: usize },
    /// Team mode: every member of `team` has emptied their hand
    TeamSweep { team: TeamId },
}

/// Checks whether the table has reached an end condition.
pub fn detect_end(players: &[Player], mode: GameMode) -> Option<GameEnd> {
    match mode {
        GameMode::Individual => {
            let mut holders = players.iter().filter(|p| p.has_cards());
            match (holders.next(), holders.next()) {
                (Some(last), None) => Some(GameEnd::LastHolder { player: last.id() }),
                _ => None,
            }
        }
        GameMode::Team => [0, 1]
            .into_iter()
            .find(|&team| {
                players
                    .iter()
                    .filter(|p| p.team() == Some(team))
                    .all(|p| !p.has_cards())
            })
            .map(|team| GameEnd::TeamSweep { team }),
    }
}

/// Players still holding cards, by ascending hand size then seat.
pub fn remaining_by_hand_size(players: &[Player]) -> Vec<usize> {
    let mut remaining: Vec<&Player> = players.iter().filter(|p| p.has_cards()).collect();
    remaining.sort_by_key(|p| (p.hand_size(), p.id()));
    remaining.into_iter().map(Player::id).collect()
}
