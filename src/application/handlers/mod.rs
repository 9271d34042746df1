//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod focus;
pub mod learner;
pub mod summary;

pub use focus::{PlanSessionHandler, PlannedSession};
pub use learner::{LoadProfileHandler, SaveProfileHandler};
pub use summary::{SimplifyTextCommand, SimplifyTextHandler, DEFAULT_SIMPLIFY_TIMEOUT};
