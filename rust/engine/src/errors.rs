use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::combination::ComboKind;
use crate::game::Phase;

/// Rejection family a [`GameError`] belongs to. Callers that only need to know
/// what to retry with can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    IllegalCombination,
    CannotBeatIncumbent,
    ForcedPlayViolation,
    OutOfTurn,
    InvalidSetup,
    InvariantViolation,
}

/// Every way a transition can be refused. All variants except
/// [`GameError::InvariantViolation`] leave the input state untouched and are safe
/// to retry with a corrected action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cards do not form a legal combination: {reason}")]
    IllegalCombination { reason: String },
    #[error("{challenger:?} of {challenger_size} does not beat {incumbent:?} of {incumbent_size}")]
    CannotBeatIncumbent {
        challenger: ComboKind,
        challenger_size: usize,
        incumbent: ComboKind,
        incumbent_size: usize,
    },
    #[error("Piles of equal size ({size}) cannot beat each other")]
    Incomparable { size: usize },
    #[error("Player {player} holds a combination that beats the incumbent and may not pass")]
    ForcedPlayViolation { player: usize },
    #[error("Nothing to pass on: player {player} must open the round")]
    MustOpen { player: usize },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    OutOfTurn { expected: usize, actual: usize },
    #[error("Action not allowed while the game is {phase:?}")]
    PhaseMismatch { phase: Phase },
    #[error("Player {player} does not hold the submitted cards")]
    CardsNotInHand { player: usize },
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
    #[error("Engine invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalCombination {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::IllegalCombination { .. } | GameError::CardsNotInHand { .. } => {
                ErrorCategory::IllegalCombination
            }
            GameError::CannotBeatIncumbent { .. } | GameError::Incomparable { .. } => {
                ErrorCategory::CannotBeatIncumbent
            }
            GameError::ForcedPlayViolation { .. } => ErrorCategory::ForcedPlayViolation,
            GameError::MustOpen { .. }
            | GameError::OutOfTurn { .. }
            | GameError::PhaseMismatch { .. } => ErrorCategory::OutOfTurn,
            GameError::InvalidSetup(_) => ErrorCategory::InvalidSetup,
            GameError::InvariantViolation(_) => ErrorCategory::InvariantViolation,
        }
    }

    /// True for engine bugs. Fatal errors must not be retried or patched over,
    /// since the score ledger can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::InvariantViolation(_))
    }
}
