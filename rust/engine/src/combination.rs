//! Card classification: decides whether a set of cards is a legal combination
//! and, if so, which kind and comparison value it carries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::cards::{Card, Rank};
use crate::config::MAX_PLAYERS;
use crate::errors::GameError;

/// Smallest same-rank group that counts as a bomb.
pub const BOMB_MIN: usize = 4;
/// Smallest same-rank group that counts as a pile.
pub const PILE_MIN: usize = 7;
/// Most cards of one ordinary rank at the largest table.
pub const MAX_RANK_GROUP: usize = 4 * MAX_PLAYERS;
/// Most jokers at the largest table.
pub const MAX_JOKER_GROUP: usize = 2 * MAX_PLAYERS;

/// Kind of a legal combination.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    /// Four to six cards of one rank, or four to six jokers
    Bomb,
    /// Seven or more cards of one rank, or seven or more jokers
    Pile,
}

impl ComboKind {
    /// Bombs and piles can cut across kinds; everything else only meets its own kind.
    pub fn is_bomb_tier(self) -> bool {
        matches!(self, ComboKind::Bomb | ComboKind::Pile)
    }
}

/// Comparison value of a combination. `MixedJokers` is declared last so the
/// derived ordering places it above every rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboValue {
    Rank(Rank),
    /// Bomb or pile mixing small and big jokers
    MixedJokers,
}

impl fmt::Display for ComboValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboValue::Rank(r) => write!(f, "{}", r),
            ComboValue::MixedJokers => f.write_str("mixed jokers"),
        }
    }
}

/// A legal combination. Only [`classify`] constructs one, so kind and value are
/// always derived from the cards; serialisation stores the cards alone and
/// re-classifies on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Combination {
    cards: Vec<Card>,
    kind: ComboKind,
    value: ComboValue,
}

impl Combination {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn kind(&self) -> ComboKind {
        self.kind
    }
    pub fn value(&self) -> ComboValue {
        self.value
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Side-payment multiplier, present only for piles.
    pub fn pile_multiplier(&self) -> Option<u64> {
        match self.kind {
            ComboKind::Pile => Some(pile_multiplier(self.size())),
            _ => None,
        }
    }

    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::points).sum()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}x{} of {}", self.kind, self.size(), self.value)
    }
}

impl TryFrom<Vec<Card>> for Combination {
    type Error = GameError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        classify(&cards)
    }
}

impl From<Combination> for Vec<Card> {
    fn from(combo: Combination) -> Self {
        combo.cards
    }
}

/// Pile multiplier for a pile of `size` cards: 7 → 1, 8 → 2, 9 → 4, …
/// Sizes below [`PILE_MIN`] have no multiplier and yield 0; sizes past the
/// range of `u64` saturate.
pub fn pile_multiplier(size: usize) -> u64 {
    if size < PILE_MIN {
        return 0;
    }
    u32::try_from(size - PILE_MIN)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(u64::MAX)
}

/// Classifies a card multiset.
///
/// Grouping is by rank only; several decks are in play, so equal suit and rank
/// is normal and only card ids must be distinct.
///
/// # Errors
///
/// Returns [`GameError::IllegalCombination`] when the cards form no recognised
/// kind, or a group larger than any table can deal ([`MAX_RANK_GROUP`] cards of
/// one rank, [`MAX_JOKER_GROUP`] jokers).
///
/// # Examples
///
/// ```
/// use guozha_engine::cards::{cards_of, Rank};
/// use guozha_engine::combination::{classify, ComboKind, ComboValue};
///
/// let pile = classify(&cards_of(&[Rank::Five; 7], 0)).unwrap();
/// assert_eq!(pile.kind(), ComboKind::Pile);
/// assert_eq!(pile.pile_multiplier(), Some(1));
///
/// let jokers = cards_of(&[Rank::JokerSmall, Rank::JokerBig, Rank::JokerBig, Rank::JokerSmall], 0);
/// assert_eq!(classify(&jokers).unwrap().value(), ComboValue::MixedJokers);
///
/// // Small and big joker never pair
/// assert!(classify(&cards_of(&[Rank::JokerSmall, Rank::JokerBig], 0)).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<Combination, GameError> {
    let Some(first) = cards.first().map(|c| c.rank) else {
        return Err(GameError::illegal("no cards submitted"));
    };
    let mut ids = HashSet::with_capacity(cards.len());
    if !cards.iter().all(|c| ids.insert(c.id)) {
        return Err(GameError::illegal("the same card was submitted twice"));
    }

    let size = cards.len();
    let uniform = cards.iter().all(|c| c.rank == first);
    let all_jokers = cards.iter().all(|c| c.rank.is_joker());

    let (kind, value) = match size {
        1 => (ComboKind::Single, ComboValue::Rank(first)),
        2 | 3 => {
            if !uniform {
                let reason = if all_jokers {
                    "small and big jokers only mix in groups of four or more"
                } else {
                    "a pair or triple needs cards of one rank"
                };
                return Err(GameError::illegal(reason));
            }
            let kind = if size == 2 {
                ComboKind::Pair
            } else {
                ComboKind::Triple
            };
            (kind, ComboValue::Rank(first))
        }
        _ => {
            let value = if uniform {
                ComboValue::Rank(first)
            } else if all_jokers {
                ComboValue::MixedJokers
            } else {
                return Err(GameError::illegal(
                    "a bomb or pile needs cards of one rank or jokers only",
                ));
            };
            let limit = if all_jokers {
                MAX_JOKER_GROUP
            } else {
                MAX_RANK_GROUP
            };
            if size > limit {
                return Err(GameError::illegal(format!(
                    "{size} cards exceed the largest possible group of {limit}"
                )));
            }
            let kind = if size >= PILE_MIN {
                ComboKind::Pile
            } else {
                ComboKind::Bomb
            };
            (kind, value)
        }
    };

    Ok(Combination {
        cards: cards.to_vec(),
        kind,
        value,
    })
}
