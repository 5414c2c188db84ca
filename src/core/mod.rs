//! Core engine types: errors, RNG, players, configuration.
//!
//! Everything here is independent of challenge content; the `bank` and
//! `challenge` modules build on it.

pub mod error;
pub mod rng;
pub mod player;
pub mod config;

pub use error::{Result, TodError};
pub use rng::{GameRng, GameRngState};
pub use player::{PlayerId, Roster, DEFAULT_MAX_PLAYERS, MIN_PLAYERS};
pub use config::{ExhaustionPolicy, GameVariant, SessionConfig};
