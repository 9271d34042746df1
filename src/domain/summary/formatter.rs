//! Fallback rendering of extracted sentences.
//!
//! Both headings carry a visible `(Fallback)` tag so readers can tell offline
//! output from a remote summary without inspecting provenance.

use crate::domain::learner::TaskPreference;

use super::sentences::sentences_or_whole;

pub const FALLBACK_TAG: &str = "(Fallback)";
pub const STRUCTURED_FALLBACK_HEADING: &str = "#### 🧩 Structured Breakdown (Fallback)";
pub const HOLISTIC_FALLBACK_HEADING: &str = "#### 🧠 Simplified Insight (Fallback)";

#[derive(Debug, Clone, Copy, Default)]
pub struct StructureFormatter;

impl StructureFormatter {
    pub fn format(text: &str, task_preference: TaskPreference) -> String {
        match task_preference {
            TaskPreference::Structured => Self::steps(text),
            TaskPreference::Holistic => format!("{}\n{}", HOLISTIC_FALLBACK_HEADING, text),
        }
    }

    fn steps(text: &str) -> String {
        let steps = sentences_or_whole(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, s)| format!("- **STEP {}**: {}", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n{}", STRUCTURED_FALLBACK_HEADING, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_renders_numbered_steps() {
        let out = StructureFormatter::format(
            "Mix the flour. Add water.",
            TaskPreference::Structured,
        );
        assert_eq!(
            out,
            "#### 🧩 Structured Breakdown (Fallback)\n\
             - **STEP 1**: Mix the flour.\n\
             - **STEP 2**: Add water."
        );
    }

    #[test]
    fn structured_without_boundary_is_single_step() {
        let out = StructureFormatter::format("just one idea", TaskPreference::Structured);
        assert!(out.ends_with("- **STEP 1**: just one idea"));
        assert!(!out.contains("STEP 2"));
    }

    #[test]
    fn holistic_renders_prose_block() {
        let out = StructureFormatter::format("The big picture.", TaskPreference::Holistic);
        assert_eq!(out, "#### 🧠 Simplified Insight (Fallback)\nThe big picture.");
        assert!(!out.contains("STEP"));
    }

    #[test]
    fn both_headings_are_tagged() {
        assert!(STRUCTURED_FALLBACK_HEADING.contains(FALLBACK_TAG));
        assert!(HOLISTIC_FALLBACK_HEADING.contains(FALLBACK_TAG));
    }
}
