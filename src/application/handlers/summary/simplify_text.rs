//! SimplifyText - Command handler turning study text into a learner-tailored summary.
//!
//! The remote summarizer is attempted once per command. Any failure (error,
//! timeout, blank body) or a missing provider degrades to the deterministic
//! offline summary, so the handler itself never fails.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::learner::LearnerProfile;
use crate::domain::summary::{
    content_chars, fallback_summary, meets_minimum_length, Summary, SummaryPrompt,
};
use crate::ports::{AIProvider, CompletionRequest};

/// Default upper bound on one remote summarization.
pub const DEFAULT_SIMPLIFY_TIMEOUT: Duration = Duration::from_secs(30);

/// Command to simplify a text for a learner.
#[derive(Debug, Clone)]
pub struct SimplifyTextCommand {
    pub text: String,
    pub profile: LearnerProfile,
}

impl SimplifyTextCommand {
    pub fn new(text: impl Into<String>, profile: LearnerProfile) -> Self {
        Self {
            text: text.into(),
            profile,
        }
    }
}

/// Handler for simplifying text.
pub struct SimplifyTextHandler {
    provider: Option<Arc<dyn AIProvider>>,
    timeout: Duration,
}

impl SimplifyTextHandler {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_SIMPLIFY_TIMEOUT,
        }
    }

    /// Handler that always uses the offline summary.
    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_remote(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn handle(&self, cmd: SimplifyTextCommand) -> Summary {
        // 1. Guard: too-short input is never sent anywhere
        if !meets_minimum_length(&cmd.text) {
            tracing::debug!(chars = content_chars(&cmd.text), "input below minimum length");
            return Summary::InputTooShort;
        }

        // 2. No provider configured means offline straight away
        let Some(provider) = self.provider.as_ref() else {
            tracing::debug!("no remote summarizer configured, using fallback");
            return Self::fallback(&cmd);
        };

        // 3. One remote attempt, bounded by the timeout
        let prompt = SummaryPrompt::for_profile(&cmd.text, &cmd.profile);
        let request = CompletionRequest::summarize(prompt.system, prompt.user)
            .with_max_tokens(prompt.length.max_tokens());
        let trace_id = request.trace_id.clone();

        match tokio::time::timeout(self.timeout, provider.complete(request)).await {
            Ok(Ok(response)) if !response.content.trim().is_empty() => {
                tracing::info!(
                    trace_id = %trace_id,
                    model = %response.model,
                    completion_tokens = response.usage.completion_tokens,
                    "remote summary produced"
                );
                Summary::Remote(response.content.trim().to_string())
            }
            Ok(Ok(_)) => {
                tracing::warn!(trace_id = %trace_id, "remote summarizer returned empty content");
                Self::fallback(&cmd)
            }
            Ok(Err(error)) => {
                tracing::warn!(trace_id = %trace_id, error = %error, "remote summarizer failed");
                Self::fallback(&cmd)
            }
            Err(_) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "remote summarizer timed out"
                );
                Self::fallback(&cmd)
            }
        }
    }

    fn fallback(cmd: &SimplifyTextCommand) -> Summary {
        Summary::Fallback(fallback_summary(&cmd.text, &cmd.profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::learner::{FocusSpan, TaskPreference};
    use crate::domain::summary::{
        Provenance, HOLISTIC_FALLBACK_HEADING, INPUT_TOO_SHORT, SOURCE_MARKER,
        STRUCTURED_FALLBACK_HEADING,
    };
    use crate::ports::AIError;

    const TEXT: &str = "Cells are the unit of life. They divide by mitosis. DNA carries code.";

    fn handler_with(mock: &MockAIProvider) -> SimplifyTextHandler {
        SimplifyTextHandler::new(Some(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn test_remote_summary_is_returned() {
        let mock = MockAIProvider::new().with_response("  - Cells are life's units.\n");
        let handler = handler_with(&mock);

        let summary = handler
            .handle(SimplifyTextCommand::new(TEXT, LearnerProfile::default()))
            .await;

        assert_eq!(summary, Summary::Remote("- Cells are life's units.".to_string()));
        assert_eq!(summary.provenance(), Some(Provenance::Remote));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_prompt_carries_profile_and_text() {
        let mock = MockAIProvider::new();
        let handler = handler_with(&mock);
        let profile = LearnerProfile::default().with_focus_span(FocusSpan::Long);

        handler.handle(SimplifyTextCommand::new(TEXT, profile)).await;

        let calls = mock.get_calls();
        let user = calls[0].user_prompt().unwrap();
        assert!(user.contains("long (35-50 min)"));
        assert!(user.ends_with(&format!("{}\n{}", SOURCE_MARKER, TEXT)));
        assert!(calls[0].system_prompt.is_some());
        assert_eq!(calls[0].max_tokens, Some(600));
    }

    #[tokio::test]
    async fn test_short_input_never_calls_provider() {
        let mock = MockAIProvider::new();
        let handler = handler_with(&mock);

        let summary = handler
            .handle(SimplifyTextCommand::new("too short", LearnerProfile::default()))
            .await;

        assert_eq!(summary, Summary::InputTooShort);
        assert_eq!(summary.text(), INPUT_TOO_SHORT);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_structured() {
        let mock = MockAIProvider::new().with_error(AIError::unavailable("down"));
        let handler = handler_with(&mock);

        let summary = handler
            .handle(SimplifyTextCommand::new(TEXT, LearnerProfile::default()))
            .await;

        assert!(summary.is_fallback());
        assert_eq!(
            summary.text(),
            format!(
                "{}\n- **STEP 1**: Cells are the unit of life.",
                STRUCTURED_FALLBACK_HEADING
            )
        );
    }

    #[tokio::test]
    async fn test_offline_holistic_fallback() {
        let handler = SimplifyTextHandler::offline();
        let profile = LearnerProfile::default()
            .with_focus_span(FocusSpan::Medium)
            .with_task_preference(TaskPreference::Holistic);

        let summary = handler.handle(SimplifyTextCommand::new(TEXT, profile)).await;

        assert_eq!(
            summary,
            Summary::Fallback(format!(
                "{}\nCells are the unit of life. They divide by mitosis.",
                HOLISTIC_FALLBACK_HEADING
            ))
        );
    }

    #[tokio::test]
    async fn test_blank_remote_content_falls_back() {
        let mock = MockAIProvider::new().with_response("   \n");
        let handler = handler_with(&mock);

        let summary = handler
            .handle(SimplifyTextCommand::new(TEXT, LearnerProfile::default()))
            .await;

        assert!(summary.is_fallback());
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let mock = MockAIProvider::new()
            .with_response("late answer")
            .with_delay(Duration::from_secs(2));
        let handler = handler_with(&mock).with_timeout(Duration::from_millis(50));

        let summary = handler
            .handle(SimplifyTextCommand::new(TEXT, LearnerProfile::default()))
            .await;

        assert!(summary.is_fallback());
        assert_eq!(mock.call_count(), 1);
    }
}
