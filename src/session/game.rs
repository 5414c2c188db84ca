//! A running game: roster, history, turns and the round in progress.
//!
//! `GameSession` owns all mutable state of one game. Every method is a
//! discrete user action (or a timer tick) and either applies a single
//! transition or returns an error without changing anything.
//!
//! ## Randomness
//!
//! Spins and challenge picks draw from separate streams derived from the
//! session seed, so a seeded session replays the same challenges whatever
//! the wheel lands on.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::round::{Round, RoundPhase};
use super::timer::{Countdown, CountdownStatus};
use super::turn::TurnOrder;
use crate::bank::{Category, ChallengeBank};
use crate::challenge::{Challenge, ChallengeSelector, PlayerHistory};
use crate::core::{GameRng, GameRngState, PlayerId, Result, Roster, SessionConfig, TodError};

const CHALLENGE_STREAM: &str = "challenge";
const SPIN_STREAM: &str = "spin";

/// One game from the first turn to restart.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use truth_or_dare::bank::{Category, ChallengeBank, Difficulty, Mode};
/// use truth_or_dare::core::{GameVariant, SessionConfig};
/// use truth_or_dare::session::{GameSession, RoundPhase};
///
/// let bank = ChallengeBank::new()
///     .with_pool(Mode::Friends, Category::Truth, Difficulty::Soft, ["Ton surnom d'enfance ?"])
///     .with_pool(Mode::Friends, Category::Dare, Difficulty::Soft, ["Imite un chat"]);
///
/// let config = SessionConfig::new(Mode::Friends, GameVariant::Classic, Difficulty::Soft)
///     .with_seed(42);
/// let mut game = GameSession::with_players(config, ["Ana", "Ben"], Arc::new(bank)).unwrap();
///
/// assert_eq!(game.current_player_name(), Some("Ana"));
/// let challenge = game.choose(Category::Dare).unwrap();
/// assert_eq!(challenge.text(), "Imite un chat");
///
/// game.next().unwrap();
/// assert_eq!(game.phase(), RoundPhase::Choice);
/// assert_eq!(game.current_player_name(), Some("Ben"));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    roster: Roster,
    bank: Arc<ChallengeBank>,
    history: PlayerHistory,
    selector: ChallengeSelector,
    turns: TurnOrder,
    round: Round,
    challenge_rng: GameRng,
    spin_rng: GameRng,
    rounds_played: u32,
}

impl GameSession {
    /// Start a session for a validated roster.
    ///
    /// Fails if the roster exceeds `config.max_players` or the bank cannot
    /// serve both categories for the configured mode and difficulty.
    pub fn new(config: SessionConfig, roster: Roster, bank: Arc<ChallengeBank>) -> Result<Self> {
        if roster.len() > config.max_players {
            return Err(TodError::TooManyPlayers {
                found: roster.len(),
                max: config.max_players,
            });
        }
        bank.validate_for(config.mode, config.difficulty)?;

        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        log::info!(
            "Starting {} {} game at {} difficulty with {} players (seed {})",
            config.mode,
            config.variant,
            config.difficulty,
            roster.len(),
            root.seed()
        );

        Ok(Self {
            selector: ChallengeSelector::new(config.exhaustion),
            turns: TurnOrder::new(config.variant, roster.len()),
            round: Round::new(Self::initial_phase(&config)),
            history: PlayerHistory::for_roster(&roster),
            challenge_rng: root.for_context(CHALLENGE_STREAM),
            spin_rng: root.for_context(SPIN_STREAM),
            rounds_played: 0,
            config,
            roster,
            bank,
        })
    }

    /// Validate raw names from the entry form and start a session.
    pub fn with_players<I, S>(config: SessionConfig, names: I, bank: Arc<ChallengeBank>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Roster::with_limit(names, config.max_players)?;
        Self::new(config, roster, bank)
    }

    fn initial_phase(config: &SessionConfig) -> RoundPhase {
        if config.variant.spins() {
            RoundPhase::Spin
        } else {
            RoundPhase::Choice
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn bank(&self) -> &ChallengeBank {
        &self.bank
    }

    #[must_use]
    pub fn history(&self) -> &PlayerHistory {
        &self.history
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    /// Player whose turn it is. `None` in spin variants until the spin.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turns.current()
    }

    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.current_player().and_then(|p| self.roster.name(p))
    }

    #[must_use]
    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.round.challenge()
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.round.countdown()
    }

    /// Completed rounds since the session started or was restarted.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    // === Transitions ===

    /// Spin the wheel or bottle: `spin → choice`.
    pub fn spin(&mut self) -> Result<PlayerId> {
        self.round.require(RoundPhase::Spin, "spin")?;
        let player = self.turns.spin(&mut self.spin_rng);
        self.round.spun()?;
        log::debug!("Spin landed on {}", &self.roster[player]);
        Ok(player)
    }

    /// The current player picks truth or dare: `choice → challenge`.
    pub fn choose(&mut self, category: Category) -> Result<&Challenge> {
        self.round.require(RoundPhase::Choice, "choose a challenge")?;
        let name = self
            .turns
            .current()
            .and_then(|p| self.roster.name(p))
            .ok_or_else(|| TodError::transition(RoundPhase::Choice.as_str(), "choose without a player"))?;

        let challenge = self.selector.select_for(
            &self.bank,
            self.config.mode,
            self.config.difficulty,
            category,
            name,
            &mut self.history,
            &mut self.challenge_rng,
        )?;

        self.round.reveal(challenge)
    }

    /// Show the countdown of a timed challenge: `challenge → timer`.
    pub fn start_timer(&mut self) -> Result<&Countdown> {
        self.round.start_timer()
    }

    /// One-second tick from the host's interval.
    pub fn tick(&mut self) -> Result<CountdownStatus> {
        let status = self.round.tick()?;
        if status == CountdownStatus::Finished {
            log::debug!("Countdown finished");
        }
        Ok(status)
    }

    /// Feed elapsed wall-clock time to the countdown.
    pub fn advance_time(&mut self, elapsed: Duration) -> Result<u32> {
        self.round.advance(elapsed)
    }

    /// Leave the timer view: `timer → challenge`.
    pub fn close_timer(&mut self) -> Result<()> {
        self.round.close_timer()
    }

    /// Move on: `challenge → choice` (classic) or `challenge → spin`.
    ///
    /// Returns the next player for classic games.
    pub fn next(&mut self) -> Result<Option<PlayerId>> {
        self.round.finish(Self::initial_phase(&self.config))?;
        self.rounds_played += 1;
        let next = self.turns.advance();
        log::debug!("Round {} done, next player {:?}", self.rounds_played, next);
        Ok(next)
    }

    /// Start over with the same players and settings; history is discarded.
    pub fn restart(&mut self) {
        log::info!("Restarting after {} rounds", self.rounds_played);
        self.history.clear();
        self.turns.reset();
        self.round.reset(Self::initial_phase(&self.config));
        self.rounds_played = 0;
    }

    // === Snapshots ===

    /// Capture the full session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            roster: self.roster.clone(),
            history: self.history.clone(),
            turns: self.turns.clone(),
            round: self.round.clone(),
            challenge_rng: self.challenge_rng.state(),
            spin_rng: self.spin_rng.state(),
            rounds_played: self.rounds_played,
        }
    }

    /// Resume a session from a snapshot. The bank is supplied again since it
    /// is never part of the snapshot.
    ///
    /// Snapshots may come from untrusted storage, so the roster and turn
    /// order are checked again; any inconsistency is a `Snapshot` error.
    pub fn restore(snapshot: SessionSnapshot, bank: Arc<ChallengeBank>) -> Result<Self> {
        bank.validate_for(snapshot.config.mode, snapshot.config.difficulty)?;

        let roster = Roster::with_limit(
            snapshot.roster.iter().map(|(_, name)| name),
            snapshot.config.max_players,
        )
        .map_err(|err| TodError::Snapshot(format!("invalid roster: {err}")))?;
        if roster != snapshot.roster {
            return Err(TodError::Snapshot("roster names are not normalized".to_string()));
        }

        let turns = &snapshot.turns;
        if turns.variant() != snapshot.config.variant {
            return Err(TodError::Snapshot(format!(
                "turn order is for a {} game but config says {}",
                turns.variant(),
                snapshot.config.variant
            )));
        }
        if turns.player_count() != roster.len() {
            return Err(TodError::Snapshot(format!(
                "turn order expects {} players but roster has {}",
                turns.player_count(),
                roster.len()
            )));
        }
        if let Some(current) = turns.current().filter(|p| p.index() >= roster.len()) {
            return Err(TodError::Snapshot(format!(
                "current player {} is outside a roster of {}",
                current.index(),
                roster.len()
            )));
        }

        Ok(Self {
            selector: ChallengeSelector::new(snapshot.config.exhaustion),
            config: snapshot.config,
            roster,
            bank,
            history: snapshot.history,
            turns: snapshot.turns,
            round: snapshot.round,
            challenge_rng: GameRng::from_state(&snapshot.challenge_rng),
            spin_rng: GameRng::from_state(&snapshot.spin_rng),
            rounds_played: snapshot.rounds_played,
        })
    }
}

/// Serializable state of a `GameSession`, without the bank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    pub roster: Roster,
    pub history: PlayerHistory,
    pub turns: TurnOrder,
    pub round: Round,
    pub challenge_rng: GameRngState,
    pub spin_rng: GameRngState,
    pub rounds_played: u32,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Difficulty, Mode};
    use crate::core::GameVariant;

    fn bank() -> Arc<ChallengeBank> {
        Arc::new(
            ChallengeBank::new()
                .with_pool(Mode::Friends, Category::Truth, Difficulty::Soft, ["t1", "t2"])
                .with_pool(
                    Mode::Friends,
                    Category::Dare,
                    Difficulty::Soft,
                    ["Danse pendant 5 secondes"],
                ),
        )
    }

    fn config(variant: GameVariant) -> SessionConfig {
        SessionConfig::new(Mode::Friends, variant, Difficulty::Soft).with_seed(11)
    }

    #[test]
    fn test_new_validates_bank() {
        let config = SessionConfig::new(Mode::Couple, GameVariant::Classic, Difficulty::Hot);
        let result = GameSession::with_players(config, ["Ana", "Ben"], bank());
        assert!(matches!(result, Err(TodError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_new_checks_roster_limit() {
        let roster = Roster::from_names(["Ana", "Ben", "Cleo"]).unwrap();
        let result = GameSession::new(config(GameVariant::Classic).with_max_players(2), roster, bank());
        assert_eq!(result.unwrap_err(), TodError::TooManyPlayers { found: 3, max: 2 });
    }

    #[test]
    fn test_choose_rejected_before_spin() {
        let mut game = GameSession::with_players(config(GameVariant::Wheel), ["Ana", "Ben"], bank()).unwrap();
        assert_eq!(game.phase(), RoundPhase::Spin);
        assert_eq!(
            game.choose(Category::Truth).unwrap_err(),
            TodError::transition("spin", "choose a challenge")
        );
        assert_eq!(game.history().count("Ana", Category::Truth), 0);
    }

    #[test]
    fn test_timed_dare_flow() {
        let mut game = GameSession::with_players(config(GameVariant::Classic), ["Ana", "Ben"], bank()).unwrap();
        assert_eq!(game.choose(Category::Dare).unwrap().duration(), Some(5));

        assert_eq!(game.start_timer().unwrap().remaining(), 5);
        assert_eq!(game.advance_time(Duration::from_millis(2500)).unwrap(), 2);
        assert_eq!(game.countdown().unwrap().display(), "3s");

        assert!(game.next().is_err());
        game.close_timer().unwrap();
        assert_eq!(game.next().unwrap(), Some(PlayerId::new(1)));
        assert!(game.countdown().is_none());
    }

    #[test]
    fn test_restart_clears_history() {
        let mut game = GameSession::with_players(config(GameVariant::Classic), ["Ana", "Ben"], bank()).unwrap();
        game.choose(Category::Truth).unwrap();
        game.next().unwrap();
        game.choose(Category::Truth).unwrap();

        game.restart();

        assert_eq!(game.phase(), RoundPhase::Choice);
        assert_eq!(game.current_player(), Some(PlayerId::new(0)));
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.history().count("Ana", Category::Truth), 0);
        assert_eq!(game.history().count("Ben", Category::Truth), 0);
    }

    #[test]
    fn test_snapshot_bytes_roundtrip() {
        let mut game = GameSession::with_players(config(GameVariant::Bottle), ["Ana", "Ben"], bank()).unwrap();
        game.spin().unwrap();
        game.choose(Category::Truth).unwrap();

        let snapshot = game.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_from_garbage() {
        assert!(matches!(
            SessionSnapshot::from_bytes(&[1, 2, 3]),
            Err(TodError::Snapshot(_))
        ));
    }
}
