//! AffectDetector port - source of the learner's affective state.

use async_trait::async_trait;

use crate::domain::affect::AffectiveState;

/// Produces one affective state per planning cycle.
///
/// Implementations may be a human override, a simulation or a classifier;
/// the planner does not care which.
#[async_trait]
pub trait AffectDetector: Send + Sync {
    async fn detect(&self) -> AffectiveState;
}
