//! Challenge content: vocabulary and the read-only bank.
//!
//! ## Key Types
//!
//! - `Mode`, `Category`, `Difficulty`: keys into the bank
//! - `ChallengeBank`: per-difficulty pools of challenge text

pub mod kinds;
pub mod registry;

pub use kinds::{Category, Difficulty, Mode};
pub use registry::ChallengeBank;
