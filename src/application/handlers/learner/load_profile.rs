//! LoadProfile - Query handler restoring the stored learner profile.
//!
//! Never fails: an empty, unreadable or corrupt store yields the default
//! profile, and partial documents are merged over the defaults.

use std::sync::Arc;

use crate::domain::learner::{resolve, LearnerProfile};
use crate::ports::ProfileStore;

/// Handler for loading the learner profile.
pub struct LoadProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl LoadProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> LearnerProfile {
        match self.store.load().await {
            Ok(Some(value)) => resolve(&value),
            Ok(None) => {
                tracing::debug!("no stored profile, using defaults");
                LearnerProfile::default()
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to load profile, using defaults");
                LearnerProfile::default()
            }
        }
    }
}
