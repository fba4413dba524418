//! Score accounting. Every change to a player's score is expressed as a
//! [`ScoreDelta`] built here and applied in one place, so the zero-sum rules can
//! be checked on the delta itself.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combination::{pile_multiplier, PILE_MIN};
use crate::player::Player;

/// Points each other player pays per unit of pile multiplier.
pub const PILE_UNIT: i64 = 30;
/// Bonus for the first finisher and penalty for the last one.
pub const RANKING_ADJUSTMENT: i64 = 30;

/// Pot contribution of a set of cards: Five 5, Ten 10, King 10, everything else 0.
pub fn pot_value(cards: &[Card]) -> u32 {
    cards.iter().map(Card::points).sum()
}

/// Immediate settlement of a pile play.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePayment {
    pub multiplier: u64,
    /// Paid to the player of the pile
    pub gain: i64,
    /// Paid by each other player
    pub loss_each: i64,
}

/// Side-payment for a pile of `size` cards at a table of `player_count`.
/// Returns `None` for anything smaller than a pile.
///
/// # Examples
///
/// ```
/// use guozha_engine::scoring::pile_side_payment;
///
/// let sp = pile_side_payment(7, 4).unwrap();
/// assert_eq!((sp.gain, sp.loss_each), (90, 30));
/// assert_eq!(pile_side_payment(9, 4).unwrap().gain, 360);
/// assert!(pile_side_payment(6, 4).is_none());
/// ```
pub fn pile_side_payment(size: usize, player_count: usize) -> Option<SidePayment> {
    if size < PILE_MIN || player_count < 2 {
        return None;
    }
    let multiplier = pile_multiplier(size);
    let loss_each = i64::try_from(multiplier)
        .unwrap_or(i64::MAX)
        .saturating_mul(PILE_UNIT);
    Some(SidePayment {
        multiplier,
        gain: loss_each.saturating_mul(player_count as i64 - 1),
        loss_each,
    })
}

/// Per-seat score changes, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta(Vec<i64>);

impl ScoreDelta {
    pub fn zero(player_count: usize) -> Self {
        Self(vec![0; player_count])
    }

    pub fn side_payment(player: usize, payment: &SidePayment, player_count: usize) -> Self {
        let mut d = Self::zero(player_count);
        for (seat, v) in d.0.iter_mut().enumerate() {
            *v = if seat == player {
                payment.gain
            } else {
                -payment.loss_each
            };
        }
        d
    }

    /// Moves `amount` from one seat to another.
    pub fn transfer(player_count: usize, from: usize, to: usize, amount: i64) -> Self {
        let mut d = Self::zero(player_count);
        d.0[from] -= amount;
        d.0[to] += amount;
        d
    }

    /// +30 to the first finisher, -30 to the last; cancels out when they coincide.
    pub fn ranking_adjustment(player_count: usize, first: usize, last: usize) -> Self {
        Self::transfer(player_count, last, first, RANKING_ADJUSTMENT)
    }

    /// Releases a round's pot to its winner. This is the only non-transfer delta:
    /// it moves card points into the score ledger.
    pub fn pot_award(player_count: usize, winner: usize, pot: u32) -> Self {
        let mut d = Self::zero(player_count);
        d.0[winner] += i64::from(pot);
        d
    }

    pub fn get(&self, seat: usize) -> i64 {
        self.0.get(seat).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    pub fn is_zero_sum(&self) -> bool {
        self.total() == 0
    }

    pub(crate) fn apply(&self, players: &mut [Player]) {
        for (player, delta) in players.iter_mut().zip(&self.0) {
            player.adjust_score(*delta);
        }
    }
}
