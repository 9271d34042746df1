//! Affect detector adapters.

mod fixed;
mod simulated;

pub use fixed::FixedAffectDetector;
pub use simulated::SimulatedAffectDetector;
