//! Focus session application handlers.

mod plan_session;

pub use plan_session::{PlanSessionHandler, PlannedSession};
