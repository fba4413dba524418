//! Seeded random seat, useful for exploring unusual game lines in simulations.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{AiPlayer, Decision};
use guozha_engine::moves::legal_plays;
use guozha_engine::view::PlayerView;

/// Picks uniformly among the legal plays and passes only when none exist.
#[derive(Debug)]
pub struct RandomAi {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomAi {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl AiPlayer for RandomAi {
    fn choose(&self, view: &PlayerView) -> Decision {
        let plays = legal_plays(&view.hand, view.incumbent.as_ref());
        if plays.is_empty() {
            return Decision::Pass;
        }
        // a poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let pick = rng.random_range(0..plays.len());
        Decision::Play(plays[pick].cards().to_vec())
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
