//! Legal-move enumeration over a hand. Used by the forced-play rule and by AI seats.

use std::collections::BTreeMap;

use crate::cards::{Card, Rank};
use crate::combination::{classify, Combination, BOMB_MIN};
use crate::compare::can_beat;

/// Every combination formable from `hand`, one card set per (kind, size, value),
/// ordered by value and then size.
///
/// Mixed small/big joker groups are included for every size from four up to
/// the number of jokers held, provided both joker ranks are present.
///
/// # Examples
///
/// ```
/// use guozha_engine::cards::{cards_of, Rank};
/// use guozha_engine::moves::candidate_plays;
///
/// let hand = cards_of(&[Rank::Four, Rank::Four, Rank::Nine], 0);
/// // single 4, pair of 4s, single 9
/// assert_eq!(candidate_plays(&hand).len(), 3);
/// ```
pub fn candidate_plays(hand: &[Card]) -> Vec<Combination> {
    let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in hand {
        by_rank.entry(card.rank).or_default().push(*card);
    }

    let mut out = Vec::new();
    for cards in by_rank.values() {
        for size in 1..=cards.len() {
            if let Ok(combo) = classify(&cards[..size]) {
                out.push(combo);
            }
        }
    }

    let small = by_rank.get(&Rank::JokerSmall).map_or(&[][..], Vec::as_slice);
    let big = by_rank.get(&Rank::JokerBig).map_or(&[][..], Vec::as_slice);
    if !small.is_empty() && !big.is_empty() {
        for size in BOMB_MIN..=small.len() + big.len() {
            let from_small = small.len().min(size - 1);
            let mut cards = small[..from_small].to_vec();
            cards.extend_from_slice(&big[..size - from_small]);
            if let Ok(combo) = classify(&cards) {
                out.push(combo);
            }
        }
    }
    out
}

/// Candidates that may be played against `incumbent`; with no incumbent, all of them.
pub fn legal_plays(hand: &[Card], incumbent: Option<&Combination>) -> Vec<Combination> {
    candidate_plays(hand)
        .into_iter()
        .filter(|combo| can_beat(combo, incumbent))
        .collect()
}

/// True when some combination in `hand` beats `incumbent`.
pub fn has_beating_play(hand: &[Card], incumbent: &Combination) -> bool {
    candidate_plays(hand)
        .iter()
        .any(|combo| can_beat(combo, Some(incumbent)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::cards_of;
    use crate::combination::{ComboKind, ComboValue};
    use Rank::*;

    #[test]
    fn enumerates_every_size_per_rank() {
        let hand = cards_of(&[Six; 8], 0);
        let kinds: Vec<ComboKind> = candidate_plays(&hand).iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ComboKind::Single,
                ComboKind::Pair,
                ComboKind::Triple,
                ComboKind::Bomb,
                ComboKind::Bomb,
                ComboKind::Bomb,
                ComboKind::Pile,
                ComboKind::Pile,
            ]
        );
    }

    #[test]
    fn mixed_joker_groups_need_both_ranks() {
        let hand = cards_of(&[JokerSmall, JokerSmall, JokerSmall, JokerBig, JokerBig], 0);
        let mixed: Vec<usize> = candidate_plays(&hand)
            .iter()
            .filter(|c| c.value() == ComboValue::MixedJokers)
            .map(Combination::size)
            .collect();
        assert_eq!(mixed, vec![4, 5]);

        let only_small = cards_of(&[JokerSmall; 5], 0);
        assert!(candidate_plays(&only_small)
            .iter()
            .all(|c| c.value() != ComboValue::MixedJokers));
    }

    #[test]
    fn legal_plays_filter_against_incumbent() {
        let hand = cards_of(&[Four, Four, Nine, Two, Two, Two, Two], 0);
        let incumbent = classify(&cards_of(&[Eight, Eight], 50)).unwrap();
        let plays = legal_plays(&hand, Some(&incumbent));
        let described: Vec<(ComboKind, usize)> =
            plays.iter().map(|c| (c.kind(), c.size())).collect();
        assert_eq!(described, vec![(ComboKind::Pair, 2), (ComboKind::Bomb, 4)]);
        assert_eq!(legal_plays(&hand, None).len(), candidate_plays(&hand).len());
    }

    #[test]
    fn forced_play_detection() {
        let three = classify(&cards_of(&[Three], 50)).unwrap();
        assert!(has_beating_play(&cards_of(&[Two], 0), &three));
        assert!(!has_beating_play(&cards_of(&[Three, Three], 0), &three));
        let pile = classify(&cards_of(&[Three; 7], 50)).unwrap();
        assert!(!has_beating_play(&cards_of(&[Two; 7], 0), &pile));
    }
}
