//! Play comparison: whether a challenging combination defeats the incumbent.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::combination::{ComboKind, ComboValue, Combination};
use crate::errors::GameError;

/// Result of challenging an incumbent combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Beats,
    DoesNotBeat,
    /// The two combinations have no winner under any ordering (equal-size
    /// piles, neither of them mixed jokers).
    Incomparable,
}

/// Compares a challenger against the incumbent. With no incumbent any legal
/// combination opens the round.
///
/// # Examples
///
/// ```
/// use guozha_engine::cards::{cards_of, Rank};
/// use guozha_engine::combination::classify;
/// use guozha_engine::compare::{compare, Outcome};
///
/// let three = classify(&cards_of(&[Rank::Three], 0)).unwrap();
/// let two = classify(&cards_of(&[Rank::Two], 1)).unwrap();
/// assert_eq!(compare(&two, Some(&three)), Outcome::Beats);
/// assert_eq!(compare(&three, Some(&two)), Outcome::DoesNotBeat);
/// assert_eq!(compare(&three, None), Outcome::Beats);
/// ```
pub fn compare(challenger: &Combination, incumbent: Option<&Combination>) -> Outcome {
    let Some(incumbent) = incumbent else {
        return Outcome::Beats;
    };
    match (challenger.kind(), incumbent.kind()) {
        (ComboKind::Pile, ComboKind::Pile) => match challenger.size().cmp(&incumbent.size()) {
            Ordering::Greater => Outcome::Beats,
            Ordering::Equal => match (challenger.value(), incumbent.value()) {
                (ComboValue::MixedJokers, ComboValue::Rank(_)) => Outcome::Beats,
                (ComboValue::Rank(_), ComboValue::MixedJokers) => Outcome::DoesNotBeat,
                _ => Outcome::Incomparable,
            },
            Ordering::Less => Outcome::DoesNotBeat,
        },
        (ComboKind::Pile, _) => Outcome::Beats,
        (_, ComboKind::Pile) => Outcome::DoesNotBeat,
        (ComboKind::Bomb, ComboKind::Bomb) => {
            let by_size = challenger.size().cmp(&incumbent.size());
            let by_value = challenger.value().cmp(&incumbent.value());
            if by_size.then(by_value) == Ordering::Greater {
                Outcome::Beats
            } else {
                Outcome::DoesNotBeat
            }
        }
        (ComboKind::Bomb, _) => Outcome::Beats,
        (_, ComboKind::Bomb) => Outcome::DoesNotBeat,
        (a, b) if a == b && challenger.value() > incumbent.value() => Outcome::Beats,
        _ => Outcome::DoesNotBeat,
    }
}

pub fn can_beat(challenger: &Combination, incumbent: Option<&Combination>) -> bool {
    compare(challenger, incumbent) == Outcome::Beats
}

/// Like [`compare`], but turns a failed challenge into the matching rejection.
pub fn require_beats(
    challenger: &Combination,
    incumbent: Option<&Combination>,
) -> Result<(), GameError> {
    match (compare(challenger, incumbent), incumbent) {
        (Outcome::Beats, _) | (_, None) => Ok(()),
        (Outcome::Incomparable, Some(_)) => Err(GameError::Incomparable {
            size: challenger.size(),
        }),
        (Outcome::DoesNotBeat, Some(inc)) => Err(GameError::CannotBeatIncumbent {
            challenger: challenger.kind(),
            challenger_size: challenger.size(),
            incumbent: inc.kind(),
            incumbent_size: inc.size(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{cards_of, Rank, Rank::*};
    use crate::combination::classify;

    fn combo(ranks: &[Rank]) -> Combination {
        classify(&cards_of(ranks, 100)).unwrap()
    }

    fn outcome(ch: &[Rank], inc: &[Rank]) -> Outcome {
        compare(&combo(ch), Some(&combo(inc)))
    }

    #[test]
    fn same_kind_compares_by_rank_strictly() {
        assert_eq!(outcome(&[Four], &[Three]), Outcome::Beats);
        assert_eq!(outcome(&[Four], &[Four]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Ace, Ace], &[King, King]), Outcome::Beats);
        assert_eq!(outcome(&[JokerBig], &[JokerSmall]), Outcome::Beats);
        assert_eq!(outcome(&[Two, Two, Two], &[JokerSmall; 3]), Outcome::DoesNotBeat);
    }

    #[test]
    fn cross_kind_plain_combinations_never_beat() {
        assert_eq!(outcome(&[JokerBig], &[Three, Three]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Three, Three], &[Four]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Ace, Ace, Ace], &[Two, Two]), Outcome::DoesNotBeat);
    }

    #[test]
    fn bombs_beat_plain_combinations_and_smaller_bombs() {
        assert_eq!(outcome(&[Three; 4], &[JokerBig]), Outcome::Beats);
        assert_eq!(outcome(&[Three; 4], &[Two, Two, Two]), Outcome::Beats);
        assert_eq!(outcome(&[Three; 5], &[Two; 4]), Outcome::Beats);
        assert_eq!(outcome(&[Two; 4], &[Three; 5]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Six; 4], &[Five; 4]), Outcome::Beats);
        assert_eq!(outcome(&[Five; 4], &[Five; 4]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Two], &[Three; 4]), Outcome::DoesNotBeat);
    }

    #[test]
    fn mixed_joker_bomb_tops_equal_size_bombs() {
        let mixed = [JokerSmall, JokerBig, JokerSmall, JokerBig];
        assert_eq!(outcome(&mixed, &[JokerBig; 4]), Outcome::Beats);
        assert_eq!(outcome(&mixed, &[Two; 4]), Outcome::Beats);
        assert_eq!(outcome(&[JokerBig; 4], &mixed), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Three; 5], &mixed), Outcome::Beats);
    }

    #[test]
    fn piles_beat_everything_smaller() {
        assert_eq!(outcome(&[Three; 7], &[Two; 6]), Outcome::Beats);
        assert_eq!(outcome(&[Three; 7], &[JokerBig]), Outcome::Beats);
        assert_eq!(outcome(&[Three; 8], &[Two; 7]), Outcome::Beats);
        assert_eq!(outcome(&[Two; 6], &[Three; 7]), Outcome::DoesNotBeat);
        assert_eq!(outcome(&[Two; 7], &[Three; 8]), Outcome::DoesNotBeat);
    }

    #[test]
    fn equal_size_piles_are_incomparable() {
        assert_eq!(outcome(&[Two; 7], &[Three; 7]), Outcome::Incomparable);
        assert_eq!(outcome(&[Three; 7], &[Two; 7]), Outcome::Incomparable);
        let err = require_beats(&combo(&[Two; 7]), Some(&combo(&[Three; 7]))).unwrap_err();
        assert_eq!(err, GameError::Incomparable { size: 7 });
    }

    #[test]
    fn mixed_joker_pile_outranks_an_equal_size_rank_pile() {
        let mixed = [JokerSmall, JokerSmall, JokerSmall, JokerBig, JokerBig, JokerBig, JokerBig];
        assert_eq!(outcome(&mixed, &[Two; 7]), Outcome::Beats);
        assert_eq!(outcome(&[Two; 7], &mixed), Outcome::DoesNotBeat);
        assert_eq!(outcome(&mixed, &mixed), Outcome::Incomparable);
        assert_eq!(outcome(&[Three; 8], &mixed), Outcome::Beats);
    }

    #[test]
    fn require_beats_reports_kinds() {
        let err = require_beats(&combo(&[Four, Four]), Some(&combo(&[Five]))).unwrap_err();
        assert_eq!(
            err,
            GameError::CannotBeatIncumbent {
                challenger: ComboKind::Pair,
                challenger_size: 2,
                incumbent: ComboKind::Single,
                incumbent_size: 1,
            }
        );
        assert!(require_beats(&combo(&[Four, Four]), None).is_ok());
    }
}
