//! Presentation hints derived from a profile.
//!
//! Renderers and playback collaborators receive these as opaque inputs; the
//! engine only decides which theme and whether audio should be offered.

use serde::{Deserialize, Serialize};

use crate::domain::learner::{LearnerProfile, VisualPreference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Standard,
    /// Light text on a dark panel.
    HighContrast,
    /// Muted greens, soft borders.
    LowSaturation,
}

impl From<VisualPreference> for Theme {
    fn from(preference: VisualPreference) -> Self {
        match preference {
            VisualPreference::Standard => Self::Standard,
            VisualPreference::HighContrast => Self::HighContrast,
            VisualPreference::LowSaturation => Self::LowSaturation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationHints {
    pub theme: Theme,
    /// Offer spoken playback of the summary.
    pub offer_audio: bool,
}

impl PresentationHints {
    pub fn for_profile(profile: &LearnerProfile) -> Self {
        Self {
            theme: profile.visual_preference().into(),
            offer_audio: profile.learning_style().prefers_audio(),
        }
    }
}
