//! In-memory profile store for tests and ephemeral runs.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};

use crate::domain::learner::LearnerProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    value: Mutex<Option<Value>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding `value` as if it had been saved earlier.
    pub fn with_value(value: Value) -> Self {
        Self {
            value: Mutex::new(Some(value)),
        }
    }

    /// Current stored document, if any.
    pub fn snapshot(&self) -> Option<Value> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Value>> {
        self.value.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load(&self) -> Result<Option<Value>, ProfileStoreError> {
        Ok(self.snapshot())
    }

    async fn save(&self, profile: &LearnerProfile) -> Result<(), ProfileStoreError> {
        *self.lock() = Some(profile.to_value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn empty_store_loads_none() {
        let store = InMemoryProfileStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemoryProfileStore::with_value(json!({ "name": "Old" }));
        store
            .save(&LearnerProfile::default().with_name("New"))
            .await
            .unwrap();

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored["name"], "New");
    }
}
