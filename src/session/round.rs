//! Round state machine.
//!
//! ```text
//!   spin ──spun──▶ choice ──reveal──▶ challenge ──finish──▶ choice | spin
//!                                      │    ▲
//!                             start_timer  close_timer
//!                                      ▼    │
//!                                      timer
//! ```
//!
//! `spin` only exists for wheel and bottle games. There is no terminal
//! state; the loop runs until the session is dropped or restarted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::timer::{Countdown, CountdownStatus};
use crate::challenge::Challenge;
use crate::core::{Result, TodError};

/// Phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the wheel or bottle to pick a player.
    Spin,
    /// The player picks truth or dare.
    Choice,
    /// The challenge is on screen.
    Challenge,
    /// The challenge countdown is on screen.
    Timer,
}

impl RoundPhase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Spin => "spin",
            RoundPhase::Choice => "choice",
            RoundPhase::Challenge => "challenge",
            RoundPhase::Timer => "timer",
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    phase: RoundPhase,
    challenge: Option<Challenge>,
    countdown: Option<Countdown>,
}

impl Round {
    /// Start in `initial` with nothing on screen.
    #[must_use]
    pub fn new(initial: RoundPhase) -> Self {
        Self {
            phase: initial,
            challenge: None,
            countdown: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Challenge on screen, during `challenge` and `timer`.
    #[must_use]
    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// Countdown of a timed challenge.
    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Fail unless in `phase`.
    pub fn require(&self, phase: RoundPhase, action: &'static str) -> Result<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(TodError::transition(self.phase.as_str(), action))
        }
    }

    /// `spin → choice`
    pub fn spun(&mut self) -> Result<()> {
        self.require(RoundPhase::Spin, "spin")?;
        self.phase = RoundPhase::Choice;
        Ok(())
    }

    /// `choice → challenge`, arming a countdown for timed challenges.
    pub fn reveal(&mut self, challenge: Challenge) -> Result<&Challenge> {
        self.require(RoundPhase::Choice, "choose a challenge")?;
        self.countdown = challenge.duration().map(Countdown::new);
        self.phase = RoundPhase::Challenge;
        Ok(&*self.challenge.insert(challenge))
    }

    /// `challenge → timer`; the countdown restarts from its full length.
    pub fn start_timer(&mut self) -> Result<&Countdown> {
        self.require(RoundPhase::Challenge, "start the timer")?;
        let countdown = self
            .countdown
            .as_mut()
            .ok_or_else(|| TodError::transition("untimed challenge", "start the timer"))?;

        countdown.reset();
        countdown.start();
        self.phase = RoundPhase::Timer;
        Ok(&*countdown)
    }

    /// One-second tick while the timer is on screen.
    pub fn tick(&mut self) -> Result<CountdownStatus> {
        Ok(self.running_countdown("tick the timer")?.tick())
    }

    /// Feed elapsed time while the timer is on screen.
    pub fn advance(&mut self, elapsed: Duration) -> Result<u32> {
        Ok(self.running_countdown("advance the timer")?.advance(elapsed))
    }

    fn running_countdown(&mut self, action: &'static str) -> Result<&mut Countdown> {
        self.require(RoundPhase::Timer, action)?;
        self.countdown
            .as_mut()
            .ok_or_else(|| TodError::transition("untimed challenge", action))
    }

    /// `timer → challenge`, cancelling the countdown. Allowed at any time.
    pub fn close_timer(&mut self) -> Result<()> {
        self.require(RoundPhase::Timer, "close the timer")?;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
        self.phase = RoundPhase::Challenge;
        Ok(())
    }

    /// `challenge → next`, clearing the screen.
    pub fn finish(&mut self, next: RoundPhase) -> Result<()> {
        self.require(RoundPhase::Challenge, "move to the next player")?;
        self.challenge = None;
        self.countdown = None;
        self.phase = next;
        Ok(())
    }

    /// Abandon the round and go back to `initial`.
    pub fn reset(&mut self, initial: RoundPhase) {
        *self = Self::new(initial);
    }
}
