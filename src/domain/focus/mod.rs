//! Focus module - session policy.
//!
//! Computes a focus-session duration and coaching message from a learner
//! profile and an observed affective state.
//!
//! # Domain Invariants
//!
//! 1. Planned duration is never below 5 minutes
//! 2. The message carries exactly one affect note, then at most one
//!    sensitivity note, then the micro-break note if it applies
//! 3. Micro-break is recommended iff focus span is short and sensitivity is high

mod plan;
mod planner;

pub use plan::{PlanNote, SessionPlan};
pub use planner::{SessionPlanner, MIN_SESSION_MINUTES};
