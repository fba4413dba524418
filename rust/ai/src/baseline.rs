//! Baseline AI implementation for Guozha.
//!
//! A deterministic rule-based seat used for simulations and as the default
//! opponent. It plays reasonably without any lookahead.

use crate::{AiPlayer, Decision};
use guozha_engine::cards::Card;
use guozha_engine::combination::{ComboKind, ComboValue, Combination};
use guozha_engine::moves::{candidate_plays, legal_plays};
use guozha_engine::view::PlayerView;

/// Simple baseline AI implementation for testing and comparison.
///
/// # Strategy
///
/// **Opening:**
/// - Play the lowest rank as one whole group, so four or more copies go out
///   as a bomb or a pile instead of being broken up
///
/// **Responding:**
/// - Prefer the cheapest same-kind answer (lowest value)
/// - Otherwise the smallest bomb, then the smallest pile
/// - Pass only when nothing beats the incumbent
///
/// # Example
///
/// ```rust
/// use guozha_ai::baseline::BaselineAi;
/// use guozha_ai::AiPlayer;
///
/// let ai = BaselineAi::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAi;

impl BaselineAi {
    pub fn new() -> Self {
        Self
    }

    /// Whole group of the lowest rank held.
    fn opening_play(hand: &[Card]) -> Option<Combination> {
        let candidates = candidate_plays(hand);
        let lowest = candidates
            .iter()
            .map(Combination::value)
            .filter(|v| matches!(v, ComboValue::Rank(_)))
            .min()?;
        candidates
            .into_iter()
            .filter(|c| c.value() == lowest)
            .max_by_key(Combination::size)
    }

    /// Cost of spending a combination as an answer; lower is cheaper.
    fn answer_cost(combo: &Combination) -> (u8, usize, ComboValue) {
        let tier = match combo.kind() {
            ComboKind::Single | ComboKind::Pair | ComboKind::Triple => 0,
            ComboKind::Bomb => 1,
            ComboKind::Pile => 2,
        };
        (tier, combo.size(), combo.value())
    }
}

impl AiPlayer for BaselineAi {
    fn choose(&self, view: &PlayerView) -> Decision {
        let chosen = match &view.incumbent {
            None => Self::opening_play(&view.hand),
            Some(incumbent) => legal_plays(&view.hand, Some(incumbent))
                .into_iter()
                .min_by_key(Self::answer_cost),
        };
        match chosen {
            Some(combo) => Decision::Play(combo.cards().to_vec()),
            None => Decision::Pass,
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guozha_engine::cards::{Rank, cards_of};
    use guozha_engine::combination::classify;
    use guozha_engine::config::GameMode;
    use guozha_engine::game::Phase;

    fn view(hand: Vec<Card>, incumbent: Option<Combination>) -> PlayerView {
        PlayerView {
            seat: 0,
            phase: Phase::Playing,
            mode: GameMode::Individual,
            current_player: 0,
            hand,
            incumbent_owner: incumbent.as_ref().map(|_| 1),
            incumbent,
            pot: 0,
            round_number: 1,
            hand_sizes: vec![0, 0],
            scores: vec![-100, -100],
            teams: vec![None, None],
            finish_order: Vec::new(),
            all_hands: None,
        }
    }

    fn ranks_of(decision: &Decision) -> Vec<Rank> {
        match decision {
            Decision::Play(cards) => cards.iter().map(|c| c.rank).collect(),
            Decision::Pass => Vec::new(),
        }
    }

    #[test]
    fn test_baseline_ai_name() {
        assert_eq!(BaselineAi::new().name(), "BaselineAI");
    }

    #[test]
    fn test_opens_with_lowest_group_whole() {
        let hand = cards_of(
            &[Rank::Four, Rank::Four, Rank::Nine, Rank::Three, Rank::Three, Rank::Three],
            0,
        );
        let decision = BaselineAi::new().choose(&view(hand, None));
        assert_eq!(ranks_of(&decision), vec![Rank::Three; 3]);
    }

    #[test]
    fn test_opens_a_pile_when_lowest_group_is_large() {
        let hand = cards_of(&[Rank::Six; 7], 0);
        let decision = BaselineAi::new().choose(&view(hand, None));
        assert_eq!(ranks_of(&decision).len(), 7);
    }

    #[test]
    fn test_answers_with_cheapest_same_kind() {
        let hand = cards_of(
            &[
                Rank::Ace,
                Rank::Ace,
                Rank::Nine,
                Rank::Nine,
                Rank::Two,
                Rank::Two,
                Rank::Two,
                Rank::Two,
            ],
            0,
        );
        let incumbent = classify(&cards_of(&[Rank::Eight, Rank::Eight], 50)).unwrap();
        let decision = BaselineAi::new().choose(&view(hand, Some(incumbent)));
        assert_eq!(ranks_of(&decision), vec![Rank::Nine, Rank::Nine]);
    }

    #[test]
    fn test_bombs_only_when_needed() {
        let hand = cards_of(&[Rank::Three, Rank::Seven, Rank::Seven, Rank::Seven, Rank::Seven], 0);
        let incumbent = classify(&cards_of(&[Rank::King], 50)).unwrap();
        let decision = BaselineAi::new().choose(&view(hand, Some(incumbent)));
        assert_eq!(ranks_of(&decision), vec![Rank::Seven; 4]);
    }

    #[test]
    fn test_passes_when_nothing_beats() {
        let hand = cards_of(&[Rank::Three, Rank::Four], 0);
        let incumbent = classify(&cards_of(&[Rank::Two], 50)).unwrap();
        assert_eq!(BaselineAi::new().choose(&view(hand, Some(incumbent))), Decision::Pass);
    }
}
