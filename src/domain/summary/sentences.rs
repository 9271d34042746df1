//! Sentence-boundary splitting for the offline summary path.

use crate::domain::learner::FocusSpan;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Splits `text` into sentences: each is a run of non-terminator characters
/// followed by a single `.`, `!` or `?`.
///
/// Terminators with nothing before them (`"!!"`) are skipped, and a trailing
/// fragment without a terminator is not a sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_terminator(c) {
            if let Some(from) = start.take() {
                sentences.push(&text[from..idx + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    sentences
}

/// Like [`split_sentences`] on the trimmed text, but a text with no boundary
/// at all is returned as a single sentence.
pub fn sentences_or_whole(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let sentences = split_sentences(trimmed);
    if sentences.is_empty() {
        vec![trimmed]
    } else {
        sentences
    }
}

/// Takes the leading sentences of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceExtractor {
    max_sentences: usize,
}

impl SentenceExtractor {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
        }
    }

    /// One sentence for a short focus span, two otherwise.
    pub fn for_focus_span(focus_span: FocusSpan) -> Self {
        if focus_span.is_short() {
            Self::new(1)
        } else {
            Self::new(2)
        }
    }

    pub fn max_sentences(&self) -> usize {
        self.max_sentences
    }

    pub fn extract(&self, text: &str) -> String {
        sentences_or_whole(text)
            .into_iter()
            .take(self.max_sentences)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}
