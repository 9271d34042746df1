//! Summary application handlers.

mod simplify_text;

pub use simplify_text::{SimplifyTextCommand, SimplifyTextHandler, DEFAULT_SIMPLIFY_TIMEOUT};
