//! Drives a game to completion with one AI per seat, feeding every event to a sink.

use thiserror::Error;
use tracing::{debug, trace};

use crate::AiPlayer;
use guozha_engine::events::{EventSink, dispatch};
use guozha_engine::game::{GameState, Phase};
use guozha_engine::GameError;

/// Upper bound on actions for one game; an 8-seat game needs far fewer.
pub const DEFAULT_MAX_STEPS: usize = 50_000;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("no AI seats supplied")]
    NoSeats,
    #[error("seat {seat} ({ai}) made a rejected move: {source}")]
    Rejected {
        seat: usize,
        ai: String,
        #[source]
        source: GameError,
    },
    #[error("game did not finish within {0} steps")]
    StepLimit(usize),
}

/// Final state of an automated game.
#[derive(Debug, Clone)]
pub struct GameRun {
    pub state: GameState,
    /// Accepted actions, including the start
    pub steps: usize,
}

/// Plays `state` to the end. Seat `i` is controlled by `ais[i % ais.len()]`.
///
/// A state still waiting to start is started first. Every event of every
/// accepted transition is forwarded to `sink` in order.
///
/// # Errors
///
/// Returns [`AutoplayError::Rejected`] when an AI submits a move the engine
/// refuses, and [`AutoplayError::StepLimit`] when the game outlasts `max_steps`.
pub fn run_game(
    state: GameState,
    ais: &[Box<dyn AiPlayer>],
    max_steps: usize,
    sink: &mut dyn EventSink,
) -> Result<GameRun, AutoplayError> {
    if ais.is_empty() {
        return Err(AutoplayError::NoSeats);
    }
    let mut state = state;
    let mut steps = 0;
    if state.phase() == Phase::Waiting {
        let t = state.start().map_err(|source| AutoplayError::Rejected {
            seat: state.current_player(),
            ai: "table".to_string(),
            source,
        })?;
        dispatch(&t.events, sink);
        state = t.state;
        steps += 1;
    }

    while !state.is_finished() {
        if steps >= max_steps {
            return Err(AutoplayError::StepLimit(max_steps));
        }
        let seat = state.current_player();
        let ai = &ais[seat % ais.len()];
        let Some(view) = state.view_for(seat) else {
            return Err(AutoplayError::Rejected {
                seat,
                ai: ai.name().to_string(),
                source: GameError::InvariantViolation(format!("no view for seat {seat}")),
            });
        };
        let action = ai.choose(&view).into_action(seat);
        trace!(seat, ?action, "ai decision");
        let t = state.apply(&action).map_err(|source| AutoplayError::Rejected {
            seat,
            ai: ai.name().to_string(),
            source,
        })?;
        dispatch(&t.events, sink);
        state = t.state;
        steps += 1;
    }
    debug!(steps, rounds = state.round_history().len(), "autoplay finished");
    Ok(GameRun { state, steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::BaselineAi;
    use crate::{AiPlayer, Decision};
    use guozha_engine::events::GameEvent;
    use guozha_engine::view::PlayerView;
    use guozha_engine::{GameConfig, GameMode};

    struct StubbornPasser;

    impl AiPlayer for StubbornPasser {
        fn choose(&self, _view: &PlayerView) -> Decision {
            Decision::Pass
        }
        fn name(&self) -> &str {
            "StubbornPasser"
        }
    }

    fn baseline_table(n: usize) -> Vec<Box<dyn AiPlayer>> {
        (0..n)
            .map(|_| Box::new(BaselineAi::new()) as Box<dyn AiPlayer>)
            .collect()
    }

    #[test]
    fn baseline_table_finishes_a_dealt_game() {
        let state = GameState::deal(GameConfig::default(), 11).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        let run = run_game(state, &baseline_table(4), DEFAULT_MAX_STEPS, &mut events).unwrap();
        assert!(run.state.is_finished());
        assert!(matches!(events.first(), Some(GameEvent::GameStarted { .. })));
        assert!(matches!(events.last(), Some(GameEvent::GameEnded { .. })));
        let awarded: i64 = run.state.round_history().iter().map(|r| i64::from(r.total_pot)).sum();
        assert_eq!(run.state.total_score(), -400 + awarded);
    }

    #[test]
    fn team_game_finishes() {
        let state = GameState::deal(GameConfig::team(6), 5).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        let run = run_game(state, &baseline_table(6), DEFAULT_MAX_STEPS, &mut events).unwrap();
        assert_eq!(run.state.config().mode, GameMode::Team);
        assert_eq!(run.state.standings().unwrap().teams.len(), 2);
    }

    #[test]
    fn rejected_moves_surface_the_engine_error() {
        let state = GameState::deal(GameConfig::individual(2), 1).unwrap();
        let ais: Vec<Box<dyn AiPlayer>> = vec![Box::new(StubbornPasser)];
        let mut events: Vec<GameEvent> = Vec::new();
        let err = run_game(state, &ais, DEFAULT_MAX_STEPS, &mut events).unwrap_err();
        assert!(matches!(
            err,
            AutoplayError::Rejected {
                source: GameError::MustOpen { .. },
                ..
            }
        ));
    }

    #[test]
    fn step_limit_is_enforced() {
        let state = GameState::deal(GameConfig::default(), 2).unwrap();
        let mut events: Vec<GameEvent> = Vec::new();
        let err = run_game(state, &baseline_table(4), 3, &mut events).unwrap_err();
        assert!(matches!(err, AutoplayError::StepLimit(3)));
    }
}
