//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Remote summarizer (Perplexity) and a scriptable mock
//! - `affect` - Simulated and fixed affect detectors
//! - `profile` - File-backed and in-memory profile stores

pub mod affect;
pub mod ai;
pub mod profile;

pub use affect::{FixedAffectDetector, SimulatedAffectDetector};
pub use ai::{provider_from_config, MockAIProvider, PerplexityConfig, PerplexityProvider};
pub use profile::{FileProfileStore, InMemoryProfileStore};
