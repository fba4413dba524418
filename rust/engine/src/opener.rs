//! Who opens the round after the previous one resolves.

use crate::config::GameMode;
use crate::game::GameState;
use crate::player::next_active_seat;

/// Picks the seat that opens the next round. `None` only when nobody holds cards.
pub trait NextOpener: Send + Sync {
    fn pick_next_opener(&self, state: &GameState, last_winner: usize) -> Option<usize>;
}

/// The winner opens again; once they have finished, the next seat clockwise does.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndividualOpener;

impl NextOpener for IndividualOpener {
    fn pick_next_opener(&self, state: &GameState, last_winner: usize) -> Option<usize> {
        let players = state.players();
        if players.get(last_winner)?.has_cards() {
            return Some(last_winner);
        }
        next_active_seat(players, last_winner)
    }
}

/// A finished winner hands the lead to the first teammate clockwise still
/// holding cards before it falls to the other team.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeamOpener;

impl NextOpener for TeamOpener {
    fn pick_next_opener(&self, state: &GameState, last_winner: usize) -> Option<usize> {
        let players = state.players();
        let winner = players.get(last_winner)?;
        if winner.has_cards() {
            return Some(last_winner);
        }
        let n = players.len();
        (1..n)
            .map(|offset| (last_winner + offset) % n)
            .find(|&seat| players[seat].team() == winner.team() && players[seat].has_cards())
            .or_else(|| next_active_seat(players, last_winner))
    }
}

static INDIVIDUAL: IndividualOpener = IndividualOpener;
static TEAM: TeamOpener = TeamOpener;

impl GameMode {
    /// Opening strategy for this mode.
    pub fn opener(self) -> &'static dyn NextOpener {
        match self {
            GameMode::Individual => &INDIVIDUAL,
            GameMode::Team => &TEAM,
        }
    }
}
