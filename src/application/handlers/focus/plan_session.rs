//! PlanSession - Query handler computing a focus session from the current affect.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::affect::AffectiveState;
use crate::domain::focus::{SessionPlan, SessionPlanner};
use crate::domain::learner::LearnerProfile;
use crate::ports::AffectDetector;

/// Detected state together with the plan derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSession {
    pub state: AffectiveState,
    pub plan: SessionPlan,
}

/// Handler for planning a focus session.
pub struct PlanSessionHandler {
    detector: Arc<dyn AffectDetector>,
}

impl PlanSessionHandler {
    pub fn new(detector: Arc<dyn AffectDetector>) -> Self {
        Self { detector }
    }

    pub async fn handle(&self, profile: &LearnerProfile) -> PlannedSession {
        let state = self.detector.detect().await;
        let plan = SessionPlanner::plan(profile, state);

        tracing::info!(
            state = %state,
            duration_minutes = plan.duration_minutes,
            micro_break = plan.micro_break_recommended,
            "focus session planned"
        );

        PlannedSession { state, plan }
    }
}
