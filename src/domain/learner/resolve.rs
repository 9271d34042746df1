//! Profile defaulting.
//!
//! Persisted or user-supplied profile data is merged over
//! [`LearnerProfile::default`]. None of these functions fail: malformed input
//! degrades field by field, and anything that is not a JSON object degrades to
//! the default profile.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::profile::LearnerProfile;
use super::values::{
    BackgroundNoise, FocusSpan, LearningStyle, Sensitivity, TaskPreference, VisualPreference,
};

/// A possibly sparse profile, e.g. from an edit form.
///
/// Fields hold raw text; categorical parsing happens on [`PartialProfile::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "focusSpan", skip_serializing_if = "Option::is_none")]
    pub focus_span: Option<String>,
    #[serde(default, alias = "taskPreference", skip_serializing_if = "Option::is_none")]
    pub task_preference: Option<String>,
    #[serde(default, alias = "learningStyle", skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    #[serde(default, alias = "visualPreference", skip_serializing_if = "Option::is_none")]
    pub visual_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<String>,
    #[serde(default, alias = "backgroundNoise", skip_serializing_if = "Option::is_none")]
    pub background_noise: Option<String>,
}

impl PartialProfile {
    /// Reads the known string fields of a JSON object; everything else is ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let field = |snake: &str, camel: &str| -> Option<String> {
            map.get(snake)
                .or_else(|| map.get(camel))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            name: field("name", "name"),
            focus_span: field("focus_span", "focusSpan"),
            task_preference: field("task_preference", "taskPreference"),
            learning_style: field("learning_style", "learningStyle"),
            visual_preference: field("visual_preference", "visualPreference"),
            sensitivity: field("sensitivity", "sensitivity"),
            background_noise: field("background_noise", "backgroundNoise"),
        }
    }

    /// Merges the present fields over the default profile.
    pub fn resolve(&self) -> LearnerProfile {
        let mut profile = LearnerProfile::default();

        if let Some(ref name) = self.name {
            profile = profile.with_name(name.as_str());
        }
        if let Some(ref raw) = self.focus_span {
            profile = profile.with_focus_span(FocusSpan::from_label(raw));
        }
        if let Some(ref raw) = self.task_preference {
            profile = profile.with_task_preference(TaskPreference::from_label(raw));
        }
        if let Some(ref raw) = self.learning_style {
            profile = profile.with_learning_style(LearningStyle::from_label(raw));
        }
        if let Some(ref raw) = self.visual_preference {
            profile = profile.with_visual_preference(VisualPreference::from_label(raw));
        }
        if let Some(ref raw) = self.sensitivity {
            profile = profile.with_sensitivity(Sensitivity::from_label(raw));
        }
        if let Some(ref raw) = self.background_noise {
            profile = profile.with_background_noise(BackgroundNoise::from_label(raw));
        }

        profile
    }
}

/// Resolves an arbitrary JSON value into a full profile.
pub fn resolve(partial: &Value) -> LearnerProfile {
    match partial {
        Value::Object(map) => PartialProfile::from_map(map).resolve(),
        _ => LearnerProfile::default(),
    }
}

/// Resolves persisted JSON text; unparseable text yields the default profile.
pub fn resolve_str(raw: &str) -> LearnerProfile {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => resolve(&value),
        Err(e) => {
            tracing::warn!(error = %e, "stored profile is not valid JSON, using defaults");
            LearnerProfile::default()
        }
    }
}
