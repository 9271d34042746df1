//! Summary module - profile-tailored text simplification.
//!
//! The remote path only needs [`SummaryPrompt`]; the offline path is
//! [`fallback_summary`], which never fails.

mod formatter;
mod prompt;
mod result;
mod sentences;

pub use formatter::{
    StructureFormatter, FALLBACK_TAG, HOLISTIC_FALLBACK_HEADING, STRUCTURED_FALLBACK_HEADING,
};
pub use prompt::{SummaryLength, SummaryPrompt, SummaryStructure, SOURCE_MARKER, SYSTEM_PROMPT};
pub use result::{
    content_chars, meets_minimum_length, Provenance, Summary, INPUT_TOO_SHORT, MIN_INPUT_CHARS,
};
pub use sentences::{sentences_or_whole, split_sentences, SentenceExtractor};

use crate::domain::learner::LearnerProfile;

/// Deterministic offline summary: leading sentences, formatted for the
/// learner's task preference.
pub fn fallback_summary(text: &str, profile: &LearnerProfile) -> String {
    let extracted = SentenceExtractor::for_focus_span(profile.focus_span()).extract(text);
    StructureFormatter::format(&extracted, profile.task_preference())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::learner::{FocusSpan, TaskPreference};

    const TEXT: &str = "Cells are the unit of life. They divide by mitosis. DNA carries code.";

    #[test]
    fn short_structured_gives_one_step() {
        let out = fallback_summary(TEXT, &LearnerProfile::default());
        assert!(out.starts_with(STRUCTURED_FALLBACK_HEADING));
        assert!(out.contains("- **STEP 1**: Cells are the unit of life."));
        assert!(!out.contains("STEP 2"));
    }

    #[test]
    fn medium_structured_gives_two_steps() {
        let profile = LearnerProfile::default().with_focus_span(FocusSpan::Medium);
        let out = fallback_summary(TEXT, &profile);
        assert!(out.contains("- **STEP 2**: They divide by mitosis."));
        assert!(!out.contains("DNA"));
    }

    #[test]
    fn long_holistic_gives_prose() {
        let profile = LearnerProfile::default()
            .with_focus_span(FocusSpan::Long)
            .with_task_preference(TaskPreference::Holistic);
        let out = fallback_summary(TEXT, &profile);
        assert_eq!(
            out,
            format!(
                "{}\nCells are the unit of life. They divide by mitosis.",
                HOLISTIC_FALLBACK_HEADING
            )
        );
    }
}
