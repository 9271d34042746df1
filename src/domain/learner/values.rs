//! Categorical preference values for the learner profile.
//!
//! Every value has a stable key (`as_str`) and a display label (`label`).
//! Persisted profiles store the label; parsing accepts either, case-insensitively,
//! or any text whose leading word is the key (so `"Short (10-20 min)"` and
//! `"short"` both resolve to [`FocusSpan::Short`]).
//!
//! `from_label` is total: text that names no known value maps to the
//! documented fallback for that category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercases, trims and turns spaces/hyphens into underscores.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// First run of ASCII letters/underscores, lowercased.
fn leading_word(raw: &str) -> String {
    raw.trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic() || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Shared lookup for all categorical values.
fn lookup<T: Copy>(
    raw: &str,
    all: &[T],
    key: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Option<T> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }

    if let Some(found) = all
        .iter()
        .copied()
        .find(|v| normalized == key(*v) || normalized == normalize(label(*v)))
    {
        return Some(found);
    }

    let word = leading_word(raw);
    all.iter().copied().find(|v| word == key(*v))
}

// ════════════════════════════════════════════════════════════════════════════════
// Focus span
// ════════════════════════════════════════════════════════════════════════════════

/// Self-reported sustainable attention duration.
///
/// Drives both summary length and the base session duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FocusSpan {
    Short,
    Medium,
    Long,
}

impl FocusSpan {
    pub const ALL: [FocusSpan; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "short (10-20 min)",
            Self::Medium => "medium (20-35 min)",
            Self::Long => "long (35-50 min)",
        }
    }

    /// Self-reported minute range `(from, to)` this category stands for.
    pub fn minute_range(&self) -> (u32, u32) {
        match self {
            Self::Short => (10, 20),
            Self::Medium => (20, 35),
            Self::Long => (35, 50),
        }
    }

    pub fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    /// Unrecognized text behaves as a medium span.
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Medium)
    }
}

impl Default for FocusSpan {
    fn default() -> Self {
        Self::Short
    }
}

impl fmt::Display for FocusSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for FocusSpan {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<FocusSpan> for String {
    fn from(value: FocusSpan) -> Self {
        value.label().to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Task preference
// ════════════════════════════════════════════════════════════════════════════════

/// Preferred way of structuring information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TaskPreference {
    /// Step-by-step breakdowns.
    Structured,
    /// High-level, big-picture narrative.
    Holistic,
}

impl TaskPreference {
    pub const ALL: [TaskPreference; 2] = [Self::Structured, Self::Holistic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Holistic => "holistic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Structured => "structured (step-by-step)",
            Self::Holistic => "holistic (big-picture)",
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    /// Anything that is not recognizably structured is treated as holistic.
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Holistic)
    }
}

impl Default for TaskPreference {
    fn default() -> Self {
        Self::Structured
    }
}

impl fmt::Display for TaskPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for TaskPreference {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<TaskPreference> for String {
    fn from(value: TaskPreference) -> Self {
        value.label().to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Learning style
// ════════════════════════════════════════════════════════════════════════════════

/// Preferred sensory channel for study material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
    Mixed,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 5] = [
        Self::Visual,
        Self::Auditory,
        Self::Kinesthetic,
        Self::ReadingWriting,
        Self::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
            Self::ReadingWriting => "reading_writing",
            Self::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    /// True when spoken playback should be offered.
    pub fn prefers_audio(&self) -> bool {
        matches!(self, Self::Auditory | Self::Mixed)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

impl Default for LearningStyle {
    fn default() -> Self {
        Self::Visual
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for LearningStyle {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<LearningStyle> for String {
    fn from(value: LearningStyle) -> Self {
        value.label().to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Visual preference
// ════════════════════════════════════════════════════════════════════════════════

/// Display contrast preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum VisualPreference {
    Standard,
    HighContrast,
    LowSaturation,
}

impl VisualPreference {
    pub const ALL: [VisualPreference; 3] =
        [Self::Standard, Self::HighContrast, Self::LowSaturation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::HighContrast => "high_contrast",
            Self::LowSaturation => "low_saturation",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

impl Default for VisualPreference {
    fn default() -> Self {
        Self::Standard
    }
}

impl fmt::Display for VisualPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for VisualPreference {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<VisualPreference> for String {
    fn from(value: VisualPreference) -> Self {
        value.label().to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Sensitivity
// ════════════════════════════════════════════════════════════════════════════════

/// Responsiveness to cognitive/sensory load.
///
/// Modulates session-length adjustments independently of affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Sensitivity {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<Sensitivity> for String {
    fn from(value: Sensitivity) -> Self {
        value.label().to_string()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Background noise
// ════════════════════════════════════════════════════════════════════════════════

/// Ambient sound the learner likes to study with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BackgroundNoise {
    NoneRequired,
    BrownNoise,
    Rain,
    Binaural,
}

impl BackgroundNoise {
    pub const ALL: [BackgroundNoise; 4] =
        [Self::NoneRequired, Self::BrownNoise, Self::Rain, Self::Binaural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoneRequired => "none_required",
            Self::BrownNoise => "brown_noise",
            Self::Rain => "rain",
            Self::Binaural => "binaural",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(raw: &str) -> Option<Self> {
        lookup(raw, &Self::ALL, |v| v.as_str(), |v| v.label())
    }

    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }
}

impl Default for BackgroundNoise {
    fn default() -> Self {
        Self::NoneRequired
    }
}

impl fmt::Display for BackgroundNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for BackgroundNoise {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<BackgroundNoise> for String {
    fn from(value: BackgroundNoise) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_span_parses_key_label_and_leading_word() {
        assert_eq!(FocusSpan::parse("short"), Some(FocusSpan::Short));
        assert_eq!(FocusSpan::parse("short (10-20 min)"), Some(FocusSpan::Short));
        assert_eq!(FocusSpan::parse("  Long (35-50 min) "), Some(FocusSpan::Long));
        assert_eq!(FocusSpan::parse("MEDIUM"), Some(FocusSpan::Medium));
    }

    #[test]
    fn focus_span_unrecognized_behaves_as_medium() {
        assert_eq!(FocusSpan::parse("forever"), None);
        assert_eq!(FocusSpan::from_label("forever"), FocusSpan::Medium);
        assert_eq!(FocusSpan::from_label(""), FocusSpan::Medium);
    }

    #[test]
    fn focus_span_default_is_short() {
        assert_eq!(FocusSpan::default(), FocusSpan::Short);
    }

    #[test]
    fn focus_span_minute_ranges() {
        assert_eq!(FocusSpan::Short.minute_range(), (10, 20));
        assert_eq!(FocusSpan::Medium.minute_range(), (20, 35));
        assert_eq!(FocusSpan::Long.minute_range(), (35, 50));
    }

    #[test]
    fn task_preference_unrecognized_is_holistic() {
        assert_eq!(
            TaskPreference::from_label("structured (step-by-step)"),
            TaskPreference::Structured
        );
        assert_eq!(TaskPreference::from_label("whatever"), TaskPreference::Holistic);
        assert_eq!(TaskPreference::default(), TaskPreference::Structured);
    }

    #[test]
    fn multi_word_keys_accept_hyphens_and_spaces() {
        assert_eq!(
            VisualPreference::parse("high-contrast"),
            Some(VisualPreference::HighContrast)
        );
        assert_eq!(
            LearningStyle::parse("Reading Writing"),
            Some(LearningStyle::ReadingWriting)
        );
        assert_eq!(
            BackgroundNoise::parse("brown noise"),
            Some(BackgroundNoise::BrownNoise)
        );
    }

    #[test]
    fn sensitivity_falls_back_to_medium() {
        assert_eq!(Sensitivity::from_label("HIGH"), Sensitivity::High);
        assert_eq!(Sensitivity::from_label("extreme"), Sensitivity::Medium);
    }

    #[test]
    fn learning_style_audio_preference() {
        assert!(LearningStyle::Auditory.prefers_audio());
        assert!(LearningStyle::Mixed.prefers_audio());
        assert!(!LearningStyle::Visual.prefers_audio());
        assert!(!LearningStyle::Kinesthetic.prefers_audio());
    }

    #[test]
    fn values_serialize_as_labels() {
        let json = serde_json::to_string(&FocusSpan::Long).unwrap();
        assert_eq!(json, "\"long (35-50 min)\"");

        let json = serde_json::to_string(&VisualPreference::LowSaturation).unwrap();
        assert_eq!(json, "\"low_saturation\"");
    }

    #[test]
    fn deserializing_unknown_label_never_fails() {
        let span: FocusSpan = serde_json::from_str("\"marathon\"").unwrap();
        assert_eq!(span, FocusSpan::Medium);

        let noise: BackgroundNoise = serde_json::from_str("\"jazz\"").unwrap();
        assert_eq!(noise, BackgroundNoise::NoneRequired);
    }
}
