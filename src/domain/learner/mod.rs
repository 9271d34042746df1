//! Learner module - cognitive profile shared by both pipelines.
//!
//! # Domain Invariants
//!
//! 1. A `LearnerProfile` is always fully populated
//! 2. Partial or malformed input is merged over the default profile, never rejected
//! 3. Unknown categorical text maps to a documented per-category fallback
//! 4. Resolving a profile's own persisted form returns the same profile

pub mod profile;
pub mod resolve;
pub mod values;

pub use profile::{LearnerProfile, DEFAULT_NAME};
pub use resolve::{resolve, resolve_str, PartialProfile};
pub use values::{
    BackgroundNoise, FocusSpan, LearningStyle, Sensitivity, TaskPreference, VisualPreference,
};
