use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four standard suits, plus the pseudo-suit carried by jokers.
/// Suits never affect legality or comparison; they only distinguish cards for display.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Suit carried by both jokers
    Joker,
}

/// Card rank in play order. The derived ordering is the comparison order used by
/// every combination: Three is lowest, Two outranks Ace, and the jokers sit on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Three = 3,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    JokerSmall,
    JokerBig,
}

/// Every rank from lowest to highest.
pub const ALL_RANKS: [Rank; 15] = [
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
    Rank::JokerSmall,
    Rank::JokerBig,
];

/// The thirteen ranks that appear in each of the four standard suits.
pub const ORDINARY_RANKS: [Rank; 13] = [
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
    Rank::Two,
];

impl Rank {
    pub fn is_joker(self) -> bool {
        matches!(self, Rank::JokerSmall | Rank::JokerBig)
    }

    /// Point value a card of this rank adds to the pot.
    pub fn points(self) -> u32 {
        match self {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }

    pub fn is_score_rank(self) -> bool {
        self.points() > 0
    }

    /// Short notation used by the CLI and in log lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::JokerSmall => "sj",
            Rank::JokerBig => "bj",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised rank '{0}'")]
pub struct ParseRankError(pub String);

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_lowercase().as_str() {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "j" => Rank::Jack,
            "q" => Rank::Queen,
            "k" => Rank::King,
            "a" => Rank::Ace,
            "2" => Rank::Two,
            "sj" | "joker-small" => Rank::JokerSmall,
            "bj" | "joker-big" => Rank::JokerBig,
            other => return Err(ParseRankError(other.to_string())),
        };
        Ok(rank)
    }
}

/// Parses a whitespace or comma separated list of rank symbols, e.g. `"5 5 K sj"`.
pub fn parse_ranks(input: &str) -> Result<Vec<Rank>, ParseRankError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}

/// A single physical card. Hands are drawn from several combined decks, so two
/// cards may share suit and rank; only `id` is unique.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Globally unique identifier within one deal
    pub id: u32,
    /// The suit of the card (Joker for both jokers)
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
}

impl Card {
    pub fn new(id: u32, suit: Suit, rank: Rank) -> Self {
        Self { id, suit, rank }
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Joker => "",
        };
        write!(f, "{}{}", suit, self.rank)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
}

/// Builds cards for the given ranks with consecutive ids starting at `first_id`.
/// Ordinary ranks cycle through the four suits; jokers get [`Suit::Joker`].
pub fn cards_of(ranks: &[Rank], first_id: u32) -> Vec<Card> {
    let suits = all_suits();
    ranks
        .iter()
        .enumerate()
        .map(|(i, &rank)| {
            let suit = if rank.is_joker() {
                Suit::Joker
            } else {
                suits[i % suits.len()]
            };
            Card::new(first_id + i as u32, suit, rank)
        })
        .collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.rank.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_puts_two_and_jokers_on_top() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::JokerSmall > Rank::Two);
        assert!(Rank::JokerBig > Rank::JokerSmall);
        assert!(ALL_RANKS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn score_ranks() {
        let total: u32 = ALL_RANKS.iter().map(|r| r.points()).sum();
        assert_eq!(total, 25);
        assert!(Rank::King.is_score_rank());
        assert!(!Rank::Queen.is_score_rank());
    }

    #[test]
    fn parses_rank_lists() {
        let ranks = parse_ranks("3, 10 k SJ bj").unwrap();
        assert_eq!(
            ranks,
            vec![Rank::Three, Rank::Ten, Rank::King, Rank::JokerSmall, Rank::JokerBig]
        );
        assert!(parse_ranks("3 1").is_err());
    }

    #[test]
    fn cards_of_assigns_ids_and_joker_suit() {
        let cards = cards_of(&[Rank::Five, Rank::Five, Rank::JokerBig], 10);
        assert_eq!(cards[0].id, 10);
        assert_eq!(cards[2].id, 12);
        assert_ne!(cards[0].suit, cards[1].suit);
        assert_eq!(cards[2].suit, Suit::Joker);
        assert_eq!(format_cards(&cards), "5 5 bj");
    }
}
