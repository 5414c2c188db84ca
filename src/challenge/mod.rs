//! Challenges: the value shown to players, how it is picked, and the
//! bookkeeping that keeps players from seeing the same prompt twice.
//!
//! ## Key Types
//!
//! - `Challenge`: text, category and derived countdown
//! - `PlayerHistory`: per-player sets of texts already shown
//! - `ChallengeSelector`: no-repeat selection with an exhaustion policy

pub mod definition;
pub mod duration;
pub mod history;
pub mod selector;

pub use definition::Challenge;
pub use duration::{extract_duration, format_remaining};
pub use history::{PlayerHistory, SeenChallenges, SeenSet};
pub use selector::{draw, select_challenge, ChallengeSelector, Draw};
