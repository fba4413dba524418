use serde::{Deserialize, Serialize};

use crate::combination::Combination;
use crate::config::GameMode;
use crate::finish::GameEnd;
use crate::ledger::RoundRecord;
use crate::ranking::Standings;

/// Observable outcome of an accepted transition. Presentation collaborators
/// (announcements, history display) consume these; the engine never calls out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        player_count: usize,
        mode: GameMode,
        first_player: usize,
    },
    PlaySubmitted {
        player: usize,
        combination: Combination,
        pot_contribution: u32,
        /// True when the play opened the round
        opened: bool,
    },
    SidePaymentApplied {
        player: usize,
        multiplier: u64,
        gain: i64,
        loss_each: i64,
    },
    Passed {
        player: usize,
    },
    RoundResolved {
        record: RoundRecord,
    },
    PlayerFinished {
        player: usize,
        /// 0-based place in the finish order
        position: usize,
    },
    /// Unplayed card points moved from the last holder to a finisher
    RemainderTransferred {
        from: usize,
        to: usize,
        points: u32,
    },
    GameEnded {
        reason: GameEnd,
        standings: Standings,
    },
}

/// Receiver for domain events.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Forwards events to a sink in order.
pub fn dispatch<S: EventSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for event in events {
        sink.on_event(event);
    }
}
