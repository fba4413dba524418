use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combination::Combination;
use crate::config::GameMode;
use crate::game::Phase;
use crate::player::TeamId;

/// What one seat is allowed to see. Other players appear only as hand sizes
/// unless the table runs with perfect information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: usize,
    pub phase: Phase,
    pub mode: GameMode,
    pub current_player: usize,
    pub hand: Vec<Card>,
    pub incumbent: Option<Combination>,
    pub incumbent_owner: Option<usize>,
    pub pot: u32,
    pub round_number: u32,
    pub hand_sizes: Vec<usize>,
    pub scores: Vec<i64>,
    pub teams: Vec<Option<TeamId>>,
    pub finish_order: Vec<usize>,
    /// Every hand, present only with `perfect_information`
    pub all_hands: Option<Vec<Vec<Card>>>,
}

impl PlayerView {
    pub fn is_my_turn(&self) -> bool {
        self.phase == Phase::Playing && self.current_player == self.seat
    }

    /// True when the seat may open freely.
    pub fn is_opening(&self) -> bool {
        self.incumbent.is_none()
    }

    pub fn teammates(&self) -> Vec<usize> {
        let Some(mine) = self.teams.get(self.seat).copied().flatten() else {
            return Vec::new();
        };
        self.teams
            .iter()
            .enumerate()
            .filter(|&(seat, team)| seat != self.seat && *team == Some(mine))
            .map(|(seat, _)| seat)
            .collect()
    }
}
