//! Summary outcome with explicit provenance.

use serde::{Deserialize, Serialize};

/// Text shown when the input is too short to summarize.
pub const INPUT_TOO_SHORT: &str = "Text too short to simplify.";

/// Minimum number of non-whitespace characters a text needs before any
/// summarization is attempted.
pub const MIN_INPUT_CHARS: usize = 20;

/// Number of non-whitespace characters in `text`.
pub fn content_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// True when `text` has at least [`MIN_INPUT_CHARS`] non-whitespace characters.
pub fn meets_minimum_length(text: &str) -> bool {
    content_chars(text) >= MIN_INPUT_CHARS
}

/// Which path produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Remote,
    Fallback,
}

/// Result of simplifying a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Summary {
    /// Produced by the remote summarizer.
    Remote(String),
    /// Produced offline by sentence extraction and formatting.
    Fallback(String),
    /// Input was below the minimum length; nothing was attempted.
    InputTooShort,
}

impl Summary {
    pub fn text(&self) -> &str {
        match self {
            Self::Remote(text) | Self::Fallback(text) => text,
            Self::InputTooShort => INPUT_TOO_SHORT,
        }
    }

    pub fn provenance(&self) -> Option<Provenance> {
        match self {
            Self::Remote(_) => Some(Provenance::Remote),
            Self::Fallback(_) => Some(Provenance::Fallback),
            Self::InputTooShort => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Remote(text) | Self::Fallback(text) => text,
            Self::InputTooShort => INPUT_TOO_SHORT.to_string(),
        }
    }
}
