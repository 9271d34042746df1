//! Instructions sent to the remote summarizer.
//!
//! Two independent axes come from the profile: length (focus span) and
//! structure (task preference).

use crate::domain::learner::{FocusSpan, LearnerProfile, TaskPreference};

pub const SYSTEM_PROMPT: &str = "You are an adaptive study assistant that writes precise, \
concise and well-structured summaries for neurodivergent learners. Be helpful and direct.";

/// Marker preceding the source text in the user instruction.
pub const SOURCE_MARKER: &str = "TEXT TO SUMMARIZE:";

/// How long the requested summary should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    /// 2-3 key points.
    Concise,
    /// 4-5 key points.
    Comprehensive,
}

impl SummaryLength {
    pub fn for_focus_span(focus_span: FocusSpan) -> Self {
        if focus_span.is_short() {
            Self::Concise
        } else {
            Self::Comprehensive
        }
    }

    pub fn target_points(&self) -> (u32, u32) {
        match self {
            Self::Concise => (2, 3),
            Self::Comprehensive => (4, 5),
        }
    }

    /// Completion token budget matching the point count.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Self::Concise => 300,
            Self::Comprehensive => 600,
        }
    }

    fn instruction(&self) -> String {
        let (min, max) = self.target_points();
        match self {
            Self::Concise => format!(
                "Keep the summary very concise ({}-{} key points or short sentences at most) \
                 to suit a short focus span.",
                min, max
            ),
            Self::Comprehensive => format!(
                "Give a fuller summary of {}-{} key points or sentences.",
                min, max
            ),
        }
    }
}

/// How the requested summary should be organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStructure {
    /// Bullets or numbered steps.
    Stepwise,
    /// High-level narrative.
    BigPicture,
}

impl SummaryStructure {
    pub fn for_task_preference(task_preference: TaskPreference) -> Self {
        match task_preference {
            TaskPreference::Structured => Self::Stepwise,
            TaskPreference::Holistic => Self::BigPicture,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            Self::Stepwise => {
                "The learner prefers a structured, step-by-step format. \
                 Use bullet points or a numbered list."
            }
            Self::BigPicture => "The learner prefers a high-level, big-picture overview.",
        }
    }
}

/// System and user instructions for one summarization request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    pub system: String,
    pub user: String,
    pub length: SummaryLength,
    pub structure: SummaryStructure,
}

impl SummaryPrompt {
    pub fn for_profile(text: &str, profile: &LearnerProfile) -> Self {
        let length = SummaryLength::for_focus_span(profile.focus_span());
        let structure = SummaryStructure::for_task_preference(profile.task_preference());

        let user = format!(
            "Simplify and summarize the following text for this learner. Focus span: '{}'. {} {}\n\n{}\n{}",
            profile.focus_span().label(),
            structure.instruction(),
            length.instruction(),
            SOURCE_MARKER,
            text
        );

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
            length,
            structure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_structured_profile_requests_concise_steps() {
        let profile = LearnerProfile::default();
        let prompt = SummaryPrompt::for_profile("Some study text.", &profile);

        assert_eq!(prompt.length, SummaryLength::Concise);
        assert_eq!(prompt.structure, SummaryStructure::Stepwise);
        assert!(prompt.user.contains("short (10-20 min)"));
        assert!(prompt.user.contains("2-3 key points"));
        assert!(prompt.user.contains("step-by-step"));
    }

    #[test]
    fn axes_vary_independently() {
        let profile = LearnerProfile::default()
            .with_focus_span(FocusSpan::Long)
            .with_task_preference(TaskPreference::Structured);
        let prompt = SummaryPrompt::for_profile("x", &profile);
        assert_eq!(prompt.length, SummaryLength::Comprehensive);
        assert_eq!(prompt.structure, SummaryStructure::Stepwise);

        let profile = LearnerProfile::default()
            .with_focus_span(FocusSpan::Short)
            .with_task_preference(TaskPreference::Holistic);
        let prompt = SummaryPrompt::for_profile("x", &profile);
        assert_eq!(prompt.length, SummaryLength::Concise);
        assert_eq!(prompt.structure, SummaryStructure::BigPicture);
        assert!(prompt.user.contains("big-picture"));
    }

    #[test]
    fn token_budget_follows_length() {
        assert!(SummaryLength::Concise.max_tokens() < SummaryLength::Comprehensive.max_tokens());
        assert_eq!(SummaryLength::Concise.max_tokens(), 300);
    }

    #[test]
    fn medium_span_requests_fuller_summary() {
        let profile = LearnerProfile::default().with_focus_span(FocusSpan::Medium);
        let prompt = SummaryPrompt::for_profile("x", &profile);
        assert!(prompt.user.contains("4-5 key points"));
    }

    #[test]
    fn source_text_follows_marker() {
        let prompt = SummaryPrompt::for_profile("The mitochondria", &LearnerProfile::default());
        assert!(prompt.user.ends_with("TEXT TO SUMMARIZE:\nThe mitochondria"));
        assert_eq!(prompt.system, SYSTEM_PROMPT);
    }
}
