//! LearnerProfile - the learner's cognitive and sensory preferences.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::values::{
    BackgroundNoise, FocusSpan, LearningStyle, Sensitivity, TaskPreference, VisualPreference,
};

/// Display name used when none is stored.
pub const DEFAULT_NAME: &str = "User";

/// A fully populated learner profile.
///
/// Values are immutable snapshots: edits go through the `with_*` builders,
/// which consume the profile and return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    name: String,
    focus_span: FocusSpan,
    task_preference: TaskPreference,
    learning_style: LearningStyle,
    visual_preference: VisualPreference,
    sensitivity: Sensitivity,
    background_noise: BackgroundNoise,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            focus_span: FocusSpan::default(),
            task_preference: TaskPreference::default(),
            learning_style: LearningStyle::default(),
            visual_preference: VisualPreference::default(),
            sensitivity: Sensitivity::default(),
            background_noise: BackgroundNoise::default(),
        }
    }
}

impl LearnerProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn focus_span(&self) -> FocusSpan {
        self.focus_span
    }

    pub fn task_preference(&self) -> TaskPreference {
        self.task_preference
    }

    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    pub fn visual_preference(&self) -> VisualPreference {
        self.visual_preference
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn background_noise(&self) -> BackgroundNoise {
        self.background_noise
    }

    /// Blank names fall back to [`DEFAULT_NAME`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    pub fn with_focus_span(mut self, focus_span: FocusSpan) -> Self {
        self.focus_span = focus_span;
        self
    }

    pub fn with_task_preference(mut self, task_preference: TaskPreference) -> Self {
        self.task_preference = task_preference;
        self
    }

    pub fn with_learning_style(mut self, learning_style: LearningStyle) -> Self {
        self.learning_style = learning_style;
        self
    }

    pub fn with_visual_preference(mut self, visual_preference: VisualPreference) -> Self {
        self.visual_preference = visual_preference;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_background_noise(mut self, background_noise: BackgroundNoise) -> Self {
        self.background_noise = background_noise;
        self
    }

    /// Persisted JSON form; `resolve` reads it back unchanged.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "focus_span": self.focus_span.label(),
            "task_preference": self.task_preference.label(),
            "learning_style": self.learning_style.label(),
            "visual_preference": self.visual_preference.label(),
            "sensitivity": self.sensitivity.label(),
            "background_noise": self.background_noise.label(),
        })
    }

    /// Short Markdown overview for profile screens.
    pub fn summary(&self) -> String {
        format!(
            "Profile for **{}**\n\
             - **Focus Span**: _{}_ | **Task Style**: _{}_\n\
             - **Learning Style**: _{}_ | **Visual Preference**: _{}_\n\
             - **Sensitivity**: _{}_ | **Noise**: _{}_",
            self.name,
            self.focus_span,
            self.task_preference,
            self.learning_style,
            self.visual_preference,
            self.sensitivity,
            self.background_noise,
        )
    }
}
