//! ProfileStore port - persistence for the learner profile.
//!
//! `load` hands back raw JSON rather than a typed profile: stored data may be
//! stale or hand-edited, and the domain's `resolve` decides how to merge it.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::learner::LearnerProfile;

/// Errors that can occur during profile storage operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize profile: {0}")]
    DeserializationFailed(String),
}

/// Port for loading and saving the learner profile
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the stored profile data
    ///
    /// # Returns
    /// `Ok(None)` when nothing has been stored yet
    ///
    /// # Errors
    /// Returns `ProfileStoreError` if the store cannot be read or holds
    /// something that is not JSON
    async fn load(&self) -> Result<Option<Value>, ProfileStoreError>;

    /// Save a profile, replacing whatever was stored
    async fn save(&self, profile: &LearnerProfile) -> Result<(), ProfileStoreError>;
}
