//! # truth-or-dare
//!
//! Presentation-agnostic engine for Truth or Dare party games.
//!
//! ## Design Principles
//!
//! 1. **Content is data**: Truths and dares live in a read-only
//!    `ChallengeBank` loaded from JSON or built in code. The engine never
//!    edits it.
//!
//! 2. **No repeats per player**: Each player keeps their own history, so a
//!    prompt is not shown to the same player twice until their pool for
//!    that category is exhausted.
//!
//! 3. **Driven from outside**: Every transition is a method call. The
//!    countdown for timed dares ticks only when the host says so.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, players, configuration
//! - `bank`: Modes, categories, difficulty tiers, the challenge bank
//! - `challenge`: Challenges, duration extraction, history, selection
//! - `session`: Turn order, round state machine, countdown, sessions

pub mod core;
pub mod bank;
pub mod challenge;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    TodError, Result,
    GameRng, GameRngState,
    PlayerId, Roster,
    GameVariant, ExhaustionPolicy, SessionConfig,
};

pub use crate::bank::{Category, ChallengeBank, Difficulty, Mode};

pub use crate::challenge::{
    Challenge, ChallengeSelector, PlayerHistory, SeenChallenges,
    extract_duration, format_remaining, select_challenge,
};

pub use crate::session::{
    Countdown, CountdownStatus,
    GameSession, SessionSnapshot,
    Round, RoundPhase, TurnOrder,
};
