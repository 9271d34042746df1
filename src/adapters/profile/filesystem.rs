//! Filesystem storage adapter for the learner profile JSON file

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::learner::LearnerProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Filesystem-based profile store
///
/// Keeps one pretty-printed JSON document at a configurable path. Values are
/// written as display labels, which `resolve` reads back leniently.
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists
    async fn ensure_dir_exists(&self) -> Result<(), ProfileStoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| {
                    ProfileStoreError::IoError(format!("Failed to create directory: {}", e))
                }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn load(&self) -> Result<Option<Value>, ProfileStoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ProfileStoreError::IoError(format!(
                    "Failed to read file: {}",
                    e
                )))
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ProfileStoreError::DeserializationFailed(e.to_string()))
    }

    async fn save(&self, profile: &LearnerProfile) -> Result<(), ProfileStoreError> {
        let content = serde_json::to_string_pretty(&profile.to_value())
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;

        self.ensure_dir_exists().await?;

        // Write through a temporary file so a crash never leaves half a profile
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content).await.map_err(|e| {
            ProfileStoreError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| ProfileStoreError::IoError(format!("Failed to rename file: {}", e)))?;

        tracing::debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::{resolve, FocusSpan, Sensitivity, TaskPreference};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(temp_dir.path().join("profile.json"));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(temp_dir.path().join("nested/dir/profile.json"));
        let profile = LearnerProfile::default()
            .with_name("Ada")
            .with_focus_span(FocusSpan::Long)
            .with_task_preference(TaskPreference::Holistic)
            .with_sensitivity(Sensitivity::High);

        store.save(&profile).await.unwrap();
        assert!(store.path().exists());

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored["name"], "Ada");
        assert_eq!(resolve(&stored), profile);
    }

    #[tokio::test]
    async fn test_save_replaces_previous() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileProfileStore::new(temp_dir.path().join("profile.json"));

        store
            .save(&LearnerProfile::default().with_name("First"))
            .await
            .unwrap();
        store
            .save(&LearnerProfile::default().with_name("Second"))
            .await
            .unwrap();

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored["name"], "Second");
        assert!(!temp_dir.path().join("profile.tmp").exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileProfileStore::new(&path);

        let result = store.load().await;
        assert!(matches!(
            result,
            Err(ProfileStoreError::DeserializationFailed(_))
        ));
    }
}
