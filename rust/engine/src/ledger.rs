use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combination::{ComboKind, Combination};
use crate::scoring::pot_value;

/// One accepted play inside a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub player: usize,
    pub cards: Vec<Card>,
    pub kind: ComboKind,
    /// Points this play added to the pot
    pub pot_contribution: u32,
}

/// A resolved round as handed to history and display consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    /// Plays in the order they were accepted
    pub plays: Vec<PlayRecord>,
    /// Pot released to the winner
    pub total_pot: u32,
    pub winner: usize,
}

impl RoundRecord {
    /// Re-sums the contributions of every play; always equals `total_pot`.
    pub fn recomputed_pot(&self) -> u32 {
        self.plays.iter().map(|p| pot_value(&p.cards)).sum()
    }

    pub fn card_count(&self) -> usize {
        self.plays.iter().map(|p| p.cards.len()).sum()
    }
}

/// Pot and plays of the round in progress, plus the archive of resolved rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundLedger {
    round_number: u32,
    pot: u32,
    plays: Vec<PlayRecord>,
    history: Vec<RoundRecord>,
}

impl Default for RoundLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundLedger {
    pub fn new() -> Self {
        Self {
            round_number: 1,
            pot: 0,
            plays: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
    pub fn is_open(&self) -> bool {
        !self.plays.is_empty()
    }

    /// Cards held by the ledger: archived rounds plus the open round.
    pub fn cards_recorded(&self) -> usize {
        self.history.iter().map(RoundRecord::card_count).sum::<usize>()
            + self.plays.iter().map(|p| p.cards.len()).sum::<usize>()
    }

    /// Sum of every archived pot.
    pub fn total_awarded(&self) -> u64 {
        self.history.iter().map(|r| u64::from(r.total_pot)).sum()
    }

    /// Adds a play to the open round and returns its pot contribution.
    pub(crate) fn record_play(&mut self, player: usize, combo: &Combination) -> u32 {
        let contribution = pot_value(combo.cards());
        self.pot += contribution;
        self.plays.push(PlayRecord {
            player,
            cards: combo.cards().to_vec(),
            kind: combo.kind(),
            pot_contribution: contribution,
        });
        contribution
    }

    /// Closes the open round in favour of `winner`, archives it, and starts the next one.
    pub(crate) fn resolve(&mut self, winner: usize) -> RoundRecord {
        let record = RoundRecord {
            round_number: self.round_number,
            plays: std::mem::take(&mut self.plays),
            total_pot: std::mem::take(&mut self.pot),
            winner,
        };
        self.history.push(record.clone());
        self.round_number += 1;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{cards_of, Rank};
    use crate::combination::classify;

    #[test]
    fn resolve_archives_and_resets() {
        let mut ledger = RoundLedger::new();
        let kings = classify(&cards_of(&[Rank::King, Rank::King], 0)).unwrap();
        let fives = classify(&cards_of(&[Rank::Five; 4], 10)).unwrap();
        assert_eq!(ledger.record_play(0, &kings), 20);
        assert_eq!(ledger.record_play(1, &fives), 20);
        assert_eq!(ledger.pot(), 40);
        assert_eq!(ledger.cards_recorded(), 6);

        let record = ledger.resolve(1);
        assert_eq!(record.round_number, 1);
        assert_eq!(record.total_pot, 40);
        assert_eq!(record.recomputed_pot(), record.total_pot);
        assert_eq!(record.winner, 1);
        assert_eq!(ledger.pot(), 0);
        assert!(ledger.plays().is_empty());
        assert!(!ledger.is_open());
        assert_eq!(ledger.round_number(), 2);
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.cards_recorded(), 6);
        assert_eq!(ledger.total_awarded(), 40);
    }
}
