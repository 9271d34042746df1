//! Domain layer - pure adaptation logic with no I/O.
//!
//! - `learner` - The learner profile, its categorical values and lenient resolution
//! - `affect` - Affective states reported by a detector
//! - `summary` - Prompt construction and the offline summary path
//! - `focus` - Session duration planning
//! - `presentation` - Rendering hints derived from the profile

pub mod affect;
pub mod focus;
pub mod learner;
pub mod presentation;
pub mod summary;
