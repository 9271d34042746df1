//! NeuroLearn - Adaptive study assistant
//!
//! This crate tailors study material and focus sessions to a learner's
//! profile: texts are simplified through a remote summarizer with a
//! deterministic offline fallback, and session lengths follow the learner's
//! focus span, sensitivity and current affective state.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
