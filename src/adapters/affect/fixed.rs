//! Affect detector that always reports the same state.
//!
//! Used for manual overrides (`--affect angry`) and in tests.

use async_trait::async_trait;

use crate::domain::affect::AffectiveState;
use crate::ports::AffectDetector;

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAffectDetector {
    state: AffectiveState,
}

impl FixedAffectDetector {
    pub fn new(state: AffectiveState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl AffectDetector for FixedAffectDetector {
    async fn detect(&self) -> AffectiveState {
        self.state
    }
}
