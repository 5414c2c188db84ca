//! Countdown for timed dares.
//!
//! The engine never sleeps. The host calls `tick` once per second, or
//! `advance` with the wall-clock time elapsed since its last frame; partial
//! seconds carry over between calls.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::challenge::format_remaining;

/// Lifecycle of a countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStatus {
    /// Not started, or cancelled.
    #[default]
    Idle,
    /// Ticking once per second.
    Running,
    /// Reached zero.
    Finished,
}

/// Resettable one-second countdown.
///
/// ```
/// use truth_or_dare::session::{Countdown, CountdownStatus};
///
/// let mut countdown = Countdown::new(2);
/// countdown.start();
/// assert_eq!(countdown.tick(), CountdownStatus::Running);
/// assert_eq!(countdown.tick(), CountdownStatus::Finished);
/// assert_eq!(countdown.remaining(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    status: CountdownStatus,
    /// Milliseconds accumulated towards the next tick.
    carry_ms: u64,
}

impl Countdown {
    /// Create an idle countdown of `seconds`.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
            status: CountdownStatus::Idle,
            carry_ms: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == CountdownStatus::Running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == CountdownStatus::Finished
    }

    /// Remaining time as shown on the timer screen.
    #[must_use]
    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }

    /// Start (or resume) ticking. A zero-length countdown finishes at once.
    pub fn start(&mut self) {
        if self.status == CountdownStatus::Finished {
            return;
        }
        self.status = if self.remaining == 0 {
            CountdownStatus::Finished
        } else {
            CountdownStatus::Running
        };
    }

    /// Elapse one second. No-op unless running.
    pub fn tick(&mut self) -> CountdownStatus {
        if self.status == CountdownStatus::Running {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.status = CountdownStatus::Finished;
                self.carry_ms = 0;
            }
        }
        self.status
    }

    /// Feed elapsed wall-clock time; returns the number of ticks performed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);

        let whole = self.carry_ms / 1000;
        let ticks = u32::try_from(whole).unwrap_or(u32::MAX).min(self.remaining);
        self.carry_ms -= u64::from(ticks) * 1000;
        self.remaining -= ticks;
        if self.remaining == 0 {
            self.status = CountdownStatus::Finished;
            self.carry_ms = 0;
        }
        ticks
    }

    /// Stop ticking and drop any partial second.
    pub fn cancel(&mut self) {
        if self.status == CountdownStatus::Running {
            self.status = CountdownStatus::Idle;
        }
        self.carry_ms = 0;
    }

    /// Restore the full duration and stop.
    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.status = CountdownStatus::Idle;
        self.carry_ms = 0;
    }
}
