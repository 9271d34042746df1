//! Session plan output and the notes that compose its message.

use serde::{Deserialize, Serialize};

/// One clause of a session plan's coaching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanNote {
    /// Stressed affect shortened the session.
    Stressed,
    /// Positive affect lengthened the session.
    GoodState,
    /// Neutral or unrecognized affect; base time used.
    Neutral,
    /// High sensitivity reduced the session further.
    HighSensitivity,
    /// Low sensitivity added a small boost.
    LowSensitivity,
    /// Short focus span plus high sensitivity: micro-break strategy.
    MicroBreak,
}

impl PlanNote {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Stressed => {
                "You seem stressed. The session is shortened for cognitive load reduction."
            }
            Self::GoodState => "You are in a good state! The session is slightly lengthened.",
            Self::Neutral => "Neutral emotion detected. Using your base focus time.",
            Self::HighSensitivity => "*High sensitivity adjusted: further reduction applied.*",
            Self::LowSensitivity => "*Low sensitivity adjusted: slight time boost applied.*",
            Self::MicroBreak => {
                "**ADAPTIVE STRATEGY**: The timer will include a short _micro-break_ \
                 due to your profile (Short span + High sensitivity)."
            }
        }
    }
}

/// A computed focus session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    /// Never below [`super::MIN_SESSION_MINUTES`].
    pub duration_minutes: u32,
    /// Note texts joined by newlines, in note order.
    pub message: String,
    pub notes: Vec<PlanNote>,
    pub micro_break_recommended: bool,
}

impl SessionPlan {
    pub(super) fn new(duration_minutes: u32, notes: Vec<PlanNote>) -> Self {
        let message = notes
            .iter()
            .map(PlanNote::text)
            .collect::<Vec<_>>()
            .join("\n");
        let micro_break_recommended = notes.contains(&PlanNote::MicroBreak);

        Self {
            duration_minutes,
            message,
            notes,
            micro_break_recommended,
        }
    }

    pub fn has_note(&self, note: PlanNote) -> bool {
        self.notes.contains(&note)
    }
}
