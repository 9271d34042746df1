//! SessionPlanner - focus-session duration from profile and affect.
//!
//! Pure and deterministic: no I/O, no randomness. The affect and
//! sensitivity adjustments are independent and applied in that order, then the
//! total is clamped to [`MIN_SESSION_MINUTES`].

use crate::domain::affect::{AffectCategory, AffectiveState};
use crate::domain::learner::{FocusSpan, LearnerProfile, Sensitivity};

use super::plan::{PlanNote, SessionPlan};

/// Absolute floor for any planned session.
pub const MIN_SESSION_MINUTES: u32 = 5;

/// Stateless planner; see [`SessionPlanner::plan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionPlanner;

impl SessionPlanner {
    /// Base minutes for a focus span before any adjustment.
    pub fn base_minutes(focus_span: FocusSpan) -> i32 {
        match focus_span {
            FocusSpan::Short => 15,
            FocusSpan::Medium => 25,
            FocusSpan::Long => 35,
        }
    }

    /// Minute delta and note for the observed affect. Exactly one note.
    pub fn affect_adjustment(state: AffectiveState) -> (i32, PlanNote) {
        match state.category() {
            AffectCategory::Stressed => (-5, PlanNote::Stressed),
            AffectCategory::Positive => (5, PlanNote::GoodState),
            AffectCategory::Neutral => (0, PlanNote::Neutral),
        }
    }

    /// Minute delta and optional note for the learner's sensitivity.
    pub fn sensitivity_adjustment(sensitivity: Sensitivity) -> (i32, Option<PlanNote>) {
        match sensitivity {
            Sensitivity::High => (-5, Some(PlanNote::HighSensitivity)),
            Sensitivity::Low => (2, Some(PlanNote::LowSensitivity)),
            Sensitivity::Medium => (0, None),
        }
    }

    pub fn micro_break_applies(profile: &LearnerProfile) -> bool {
        profile.focus_span().is_short() && profile.sensitivity() == Sensitivity::High
    }

    pub fn plan(profile: &LearnerProfile, state: AffectiveState) -> SessionPlan {
        let base = Self::base_minutes(profile.focus_span());
        let (affect_delta, affect_note) = Self::affect_adjustment(state);
        let (sensitivity_delta, sensitivity_note) =
            Self::sensitivity_adjustment(profile.sensitivity());

        let total = base + affect_delta + sensitivity_delta;
        let duration_minutes = total.max(MIN_SESSION_MINUTES as i32) as u32;

        let mut notes = vec![affect_note];
        notes.extend(sensitivity_note);
        if Self::micro_break_applies(profile) {
            notes.push(PlanNote::MicroBreak);
        }

        SessionPlan::new(duration_minutes, notes)
    }
}
