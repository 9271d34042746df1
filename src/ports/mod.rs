//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Remote text completion used by the simplifier
//! - `ProfileStore` - Persistence for the single learner profile
//! - `AffectDetector` - Source of the affective state fed to the planner

mod affect_detector;
mod ai_provider;
mod profile_store;

pub use affect_detector::AffectDetector;
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use profile_store::{ProfileStore, ProfileStoreError};
