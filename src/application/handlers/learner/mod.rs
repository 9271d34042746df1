//! Learner profile application handlers.

mod load_profile;
mod save_profile;

pub use load_profile::LoadProfileHandler;
pub use save_profile::SaveProfileHandler;
