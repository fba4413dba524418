use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cards::Card;
use crate::errors::GameError;
use crate::ledger::RoundRecord;

/// Team identifier; seats alternate between team 0 and team 1.
pub type TeamId = usize;

/// A seat at the table with its hand, running score and won rounds.
/// Scores only change through [`crate::scoring::ScoreDelta::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index, 0-based
    id: usize,
    /// Cards still held; shrinks monotonically
    hand: Vec<Card>,
    /// Cumulative score
    score: i64,
    /// Final play-completion rank, set when the game ends
    finish_rank: Option<usize>,
    /// Rounds this player won, in order
    won_rounds: Vec<RoundRecord>,
    /// Team membership in team mode
    team: Option<TeamId>,
    piles_played: u32,
    side_payment_net: i64,
}

impl Player {
    pub fn new(id: usize, hand: Vec<Card>, score: i64, team: Option<TeamId>) -> Self {
        Self {
            id,
            hand,
            score,
            finish_rank: None,
            won_rounds: Vec::new(),
            team,
            piles_played: 0,
            side_payment_net: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
    pub fn score(&self) -> i64 {
        self.score
    }
    pub fn finish_rank(&self) -> Option<usize> {
        self.finish_rank
    }
    pub fn won_rounds(&self) -> &[RoundRecord] {
        &self.won_rounds
    }
    pub fn team(&self) -> Option<TeamId> {
        self.team
    }
    pub fn piles_played(&self) -> u32 {
        self.piles_played
    }
    /// Net effect of pile side-payments on this player's score.
    pub fn side_payment_net(&self) -> i64 {
        self.side_payment_net
    }

    /// Point value of the cards still in hand.
    pub fn hand_points(&self) -> u32 {
        self.hand.iter().map(Card::points).sum()
    }

    /// True when every submitted card id is in this hand.
    pub fn holds(&self, cards: &[Card]) -> bool {
        let held: HashSet<u32> = self.hand.iter().map(|c| c.id).collect();
        cards.iter().all(|c| held.contains(&c.id))
    }

    pub(crate) fn remove_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        if !self.holds(cards) {
            return Err(GameError::CardsNotInHand { player: self.id });
        }
        let played: HashSet<u32> = cards.iter().map(|c| c.id).collect();
        self.hand.retain(|c| !played.contains(&c.id));
        Ok(())
    }

    pub(crate) fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }

    pub(crate) fn record_side_payment(&mut self, delta: i64, own_pile: bool) {
        self.side_payment_net += delta;
        if own_pile {
            self.piles_played += 1;
        }
    }

    pub(crate) fn push_won_round(&mut self, record: RoundRecord) {
        self.won_rounds.push(record);
    }

    pub(crate) fn set_finish_rank(&mut self, rank: usize) {
        self.finish_rank = Some(rank);
    }
}

/// Next seat clockwise from `from` whose hand is not empty. `from` itself is
/// considered last, after every other seat.
pub fn next_active_seat(players: &[Player], from: usize) -> Option<usize> {
    let n = players.len();
    (1..=n)
        .map(|offset| (from + offset) % n)
        .find(|&seat| players[seat].has_cards())
}
