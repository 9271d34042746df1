//! Affective state reported by an external detector.
//!
//! The engine treats the state as an opaque label from a closed set; how it
//! was produced (override, simulation, classifier) is not its concern.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectiveState {
    Neutral,
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
}

/// How an affective state bears on session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffectCategory {
    /// sad, angry, fear
    Stressed,
    /// happy, surprise
    Positive,
    Neutral,
}

impl AffectiveState {
    pub const ALL: [AffectiveState; 6] = [
        Self::Neutral,
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Fear,
        Self::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
        }
    }

    /// Case-insensitive; `None` for labels outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.as_str().eq_ignore_ascii_case(raw))
    }

    /// Unrecognized labels are planned for as neutral.
    pub fn parse_or_neutral(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Neutral)
    }

    pub fn category(&self) -> AffectCategory {
        match self {
            Self::Sad | Self::Angry | Self::Fear => AffectCategory::Stressed,
            Self::Happy | Self::Surprise => AffectCategory::Positive,
            Self::Neutral => AffectCategory::Neutral,
        }
    }
}

impl Default for AffectiveState {
    fn default() -> Self {
        Self::Neutral
    }
}

impl fmt::Display for AffectiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
