//! Simulated affect detector.
//!
//! Stands in for a camera-based emotion classifier: every call draws one
//! state uniformly from the six known states.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

use crate::domain::affect::AffectiveState;
use crate::ports::AffectDetector;

pub struct SimulatedAffectDetector {
    rng: Mutex<StdRng>,
}

impl SimulatedAffectDetector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of states.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedAffectDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AffectDetector for SimulatedAffectDetector {
    async fn detect(&self) -> AffectiveState {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let state = AffectiveState::ALL
            .choose(&mut *rng)
            .copied()
            .unwrap_or_default();

        tracing::debug!(state = %state, "simulated affect detected");
        state
    }
}
