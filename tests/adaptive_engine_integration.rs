//! Integration tests for the adaptive learning engine.
//!
//! These tests drive the public API end to end:
//! 1. A profile is persisted to disk and restored through the handlers
//! 2. Text is simplified through a failing remote summarizer (fallback path)
//! 3. A focus session is planned for a fixed affective state
//!
//! Uses the mock provider and a temporary directory; no network access.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use neurolearn::adapters::{FileProfileStore, FixedAffectDetector, MockAIProvider};
use neurolearn::application::{
    LoadProfileHandler, PlanSessionHandler, SaveProfileHandler, SimplifyTextCommand,
    SimplifyTextHandler,
};
use neurolearn::domain::affect::AffectiveState;
use neurolearn::domain::focus::PlanNote;
use neurolearn::domain::learner::{
    resolve, FocusSpan, LearnerProfile, Sensitivity, TaskPreference,
};
use neurolearn::domain::summary::{Provenance, Summary, STRUCTURED_FALLBACK_HEADING};
use neurolearn::ports::{AIError, ProfileStore};

const STUDY_TEXT: &str = "Photosynthesis turns light into chemical energy. \
                          It happens in the chloroplasts. Oxygen is released as a by-product.";

fn stressed_learner() -> LearnerProfile {
    resolve(&json!({
        "name": "Robin",
        "focus_span": "short (10-20 min)",
        "task_preference": "structured (step-by-step)",
        "sensitivity": "high",
    }))
}

#[tokio::test]
async fn stressed_short_learner_gets_floor_session_and_fallback_steps() {
    let profile = stressed_learner();
    assert_eq!(profile.focus_span(), FocusSpan::Short);
    assert_eq!(profile.sensitivity(), Sensitivity::High);

    let provider = MockAIProvider::new().with_error(AIError::unavailable("service down"));
    let simplifier = SimplifyTextHandler::new(Some(Arc::new(provider.clone())));

    let summary = simplifier
        .handle(SimplifyTextCommand::new(STUDY_TEXT, profile.clone()))
        .await;

    assert_eq!(summary.provenance(), Some(Provenance::Fallback));
    assert_eq!(
        summary.text(),
        format!(
            "{}\n- **STEP 1**: Photosynthesis turns light into chemical energy.",
            STRUCTURED_FALLBACK_HEADING
        )
    );
    assert_eq!(provider.call_count(), 1);

    let detector = FixedAffectDetector::new(AffectiveState::Angry);
    let planner = PlanSessionHandler::new(Arc::new(detector));
    let planned = planner.handle(&profile).await;

    assert_eq!(planned.plan.duration_minutes, 5);
    assert!(planned.plan.micro_break_recommended);
    assert_eq!(
        planned.plan.notes,
        vec![
            PlanNote::Stressed,
            PlanNote::HighSensitivity,
            PlanNote::MicroBreak
        ]
    );
}

#[tokio::test]
async fn profile_survives_save_and_load_through_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let store: Arc<dyn ProfileStore> =
        Arc::new(FileProfileStore::new(temp_dir.path().join("profile.json")));

    // Nothing stored yet
    let loaded = LoadProfileHandler::new(store.clone()).handle().await;
    assert_eq!(loaded, LearnerProfile::default());

    let profile = stressed_learner().with_task_preference(TaskPreference::Holistic);
    SaveProfileHandler::new(store.clone()).handle(&profile).await;

    let restored = LoadProfileHandler::new(store).handle().await;
    assert_eq!(restored, profile);
}

#[tokio::test]
async fn slow_remote_summarizer_is_abandoned() {
    let provider = MockAIProvider::new()
        .with_response("too late")
        .with_delay(Duration::from_secs(5));
    let simplifier = SimplifyTextHandler::new(Some(Arc::new(provider)))
        .with_timeout(Duration::from_millis(20));

    let summary = simplifier
        .handle(SimplifyTextCommand::new(STUDY_TEXT, LearnerProfile::default()))
        .await;

    assert!(summary.is_fallback());
}

#[tokio::test]
async fn tiny_input_short_circuits() {
    let provider = MockAIProvider::new();
    let simplifier = SimplifyTextHandler::new(Some(Arc::new(provider.clone())));

    let summary = simplifier
        .handle(SimplifyTextCommand::new("", LearnerProfile::default()))
        .await;

    assert_eq!(summary, Summary::InputTooShort);
    assert_eq!(provider.call_count(), 0);
}
