//! SaveProfile - Command handler persisting the learner profile.

use std::sync::Arc;

use crate::domain::learner::LearnerProfile;
use crate::ports::ProfileStore;

/// Handler for saving the learner profile.
pub struct SaveProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Persists `profile`. A failed write is logged; the in-memory profile
    /// stays authoritative for the rest of the run.
    pub async fn handle(&self, profile: &LearnerProfile) {
        match self.store.save(profile).await {
            Ok(()) => tracing::info!(name = %profile.name(), "profile saved"),
            Err(error) => tracing::warn!(error = %error, "failed to save profile"),
        }
    }
}
