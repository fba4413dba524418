//! # guozha-ai: Computer Seats for Guozha
//!
//! Move selection for computer-controlled seats, plus a driver that plays a whole
//! game by serialising engine calls for a table of AI seats.
//!
//! ## Core Components
//!
//! - [`AiPlayer`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Deterministic rule-based seat
//! - [`random`] - Seeded seat that picks uniformly among legal plays
//! - [`autoplay`] - Plays a dealt game to completion
//! - [`create_ai`] - Factory function for creating AI seats by name
//!
//! ## Quick Start
//!
//! ```rust
//! use guozha_ai::{create_ai, Decision};
//! use guozha_engine::{GameConfig, GameState};
//!
//! let ai = create_ai("baseline").expect("known AI");
//! let state = GameState::deal(GameConfig::default(), 42).unwrap();
//! let state = state.start().unwrap().state;
//!
//! let seat = state.current_player();
//! let view = state.view_for(seat).unwrap();
//! // Opening seats always play
//! assert!(matches!(ai.choose(&view), Decision::Play(_)));
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - Sheds low groups whole and answers with the cheapest beating play
//! - `"random"` - Uniform over legal plays, seeded for reproducible simulations

use guozha_engine::cards::Card;
use guozha_engine::game::Action;
use guozha_engine::view::PlayerView;

pub mod autoplay;
pub mod baseline;
pub mod random;

/// What a seat wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Play(Vec<Card>),
    Pass,
}

impl Decision {
    /// Converts the decision into an engine action for `seat`.
    pub fn into_action(self, seat: usize) -> Action {
        match self {
            Decision::Play(cards) => Action::Play {
                player: seat,
                cards,
            },
            Decision::Pass => Action::Pass { player: seat },
        }
    }
}

/// Trait defining the interface for computer-controlled seats.
///
/// Implementors only see a [`PlayerView`], so they never learn other hands
/// unless the table runs with perfect information.
///
/// # Example Implementation
///
/// ```rust
/// use guozha_ai::{AiPlayer, Decision};
/// use guozha_engine::view::PlayerView;
///
/// struct AlwaysPass;
///
/// impl AiPlayer for AlwaysPass {
///     fn choose(&self, _view: &PlayerView) -> Decision {
///         Decision::Pass
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysPass"
///     }
/// }
/// ```
pub trait AiPlayer: Send + Sync {
    /// Choose the next action for the seat described by `view`.
    ///
    /// A well-behaved implementation returns a play whenever the seat holds a
    /// beating combination, since the engine refuses such passes.
    fn choose(&self, view: &PlayerView) -> Decision;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create AI seats by type string.
///
/// # Arguments
///
/// * `ai_type` - String identifier for the AI type (`"baseline"` or `"random"`)
///
/// # Returns
///
/// `None` for an unknown type.
///
/// # Example
///
/// ```rust
/// use guozha_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AiPlayer>> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(baseline::BaselineAi::new())),
        "random" => Some(Box::new(random::RandomAi::with_seed(0))),
        _ => None,
    }
}

/// Like [`create_ai`], but seeds randomised strategies so that each seat of a
/// simulated table draws from its own stream.
pub fn create_seeded_ai(ai_type: &str, seed: u64) -> Option<Box<dyn AiPlayer>> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "random" => Some(Box::new(random::RandomAi::with_seed(seed))),
        other => create_ai(other),
    }
}

/// Names accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["baseline", "random"];
