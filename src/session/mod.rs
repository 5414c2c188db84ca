//! Game sessions: turn order, the round state machine, and timed dares.
//!
//! ## Key Types
//!
//! - `TurnOrder`: sequential (classic) or spun (wheel, bottle) player choice
//! - `Round` / `RoundPhase`: `choice → challenge → timer` state machine
//! - `Countdown`: one-second countdown driven by host ticks
//! - `GameSession`: owns everything above plus the per-player history
//! - `SessionSnapshot`: serializable session state

pub mod game;
pub mod round;
pub mod timer;
pub mod turn;

pub use game::{GameSession, SessionSnapshot};
pub use round::{Round, RoundPhase};
pub use timer::{Countdown, CountdownStatus};
pub use turn::TurnOrder;
