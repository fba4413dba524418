use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{all_suits, Card, Rank, Suit, ORDINARY_RANKS};

/// Cards in one deck: 52 suited cards plus the small and big joker.
pub const DECK_SIZE: usize = 54;

/// Builds one ordered 54-card deck. Ids are `deck_index * 54 + position`, so ids
/// stay unique when several decks are combined.
pub fn full_deck(deck_index: u32) -> Vec<Card> {
    let base = deck_index * DECK_SIZE as u32;
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &ORDINARY_RANKS {
            v.push(Card::new(base + v.len() as u32, s, r));
        }
    }
    v.push(Card::new(base + v.len() as u32, Suit::Joker, Rank::JokerSmall));
    v.push(Card::new(base + v.len() as u32, Suit::Joker, Rank::JokerBig));
    v
}

/// Deterministic dealer: combines one deck per player, shuffles with a seeded
/// ChaCha20 stream and splits the result into equal hands.
///
/// # Examples
///
/// ```
/// use guozha_engine::deck::Dealer;
///
/// let hands = Dealer::new_with_seed(42).deal(4);
/// assert_eq!(hands.len(), 4);
/// assert!(hands.iter().all(|h| h.len() == 54));
///
/// // Same seed produces the same deal
/// assert_eq!(hands, Dealer::new_with_seed(42).deal(4));
/// ```
#[derive(Debug)]
pub struct Dealer {
    rng: ChaCha20Rng,
}

impl Dealer {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles `player_count` combined decks and deals 54 cards to each player.
    pub fn deal(&mut self, player_count: usize) -> Vec<Vec<Card>> {
        let mut cards: Vec<Card> = (0..player_count as u32).flat_map(full_deck).collect();
        cards.shuffle(&mut self.rng);
        let mut hands: Vec<Vec<Card>> = cards
            .chunks(DECK_SIZE)
            .map(|chunk| chunk.to_vec())
            .collect();
        for hand in &mut hands {
            hand.sort_by_key(|c| (c.rank, c.id));
        }
        hands
    }
}
