//! Session configuration.
//!
//! The setup screens collect a mode, a variant and a difficulty; the front
//! end hands them to the engine as a `SessionConfig`:
//! - `GameVariant`: how the next player is chosen
//! - `ExhaustionPolicy`: what happens once a player has seen every challenge
//! - `SessionConfig`: combines all configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::TodError;
use super::player::DEFAULT_MAX_PLAYERS;
use crate::bank::{Difficulty, Mode};

/// How the player for each round is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    /// Sequential turn order with wrap-around.
    #[default]
    Classic,
    /// A spinning wheel picks a random player each round.
    Wheel,
    /// A spinning bottle picks a random player each round.
    Bottle,
}

impl GameVariant {
    /// All variants in menu order.
    pub const ALL: [GameVariant; 3] = [GameVariant::Classic, GameVariant::Wheel, GameVariant::Bottle];

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameVariant::Classic => "classic",
            GameVariant::Wheel => "wheel",
            GameVariant::Bottle => "bottle",
        }
    }

    /// Whether rounds begin with a random spin instead of a fixed turn.
    #[must_use]
    pub fn spins(&self) -> bool {
        !matches!(self, GameVariant::Classic)
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameVariant {
    type Err = TodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(GameVariant::Classic),
            "wheel" | "roulette" => Ok(GameVariant::Wheel),
            "bottle" => Ok(GameVariant::Bottle),
            _ => Err(TodError::unknown("variant", s)),
        }
    }
}

/// Behaviour once every challenge in a pool has been shown to a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustionPolicy {
    /// Pick from the full pool; history keeps growing and repeats are allowed
    /// for the rest of the session.
    #[default]
    Fallback,
    /// Clear the player's history for that category and start a new
    /// no-repeat cycle.
    Reset,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Which section of the challenge bank to use.
    pub mode: Mode,

    /// How players are chosen each round.
    pub variant: GameVariant,

    /// Content intensity.
    pub difficulty: Difficulty,

    /// RNG seed. `None` draws one from the OS at session start.
    pub seed: Option<u64>,

    /// Pool exhaustion behaviour.
    pub exhaustion: ExhaustionPolicy,

    /// Upper bound on roster size.
    pub max_players: usize,
}

impl SessionConfig {
    /// Create a new session configuration.
    pub fn new(mode: Mode, variant: GameVariant, difficulty: Difficulty) -> Self {
        Self {
            mode,
            variant,
            difficulty,
            seed: None,
            exhaustion: ExhaustionPolicy::default(),
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }

    /// Fix the RNG seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the exhaustion policy.
    #[must_use]
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Set the maximum roster size.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Mode::default(), GameVariant::default(), Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SessionConfig::new(Mode::Couple, GameVariant::Bottle, Difficulty::Hot)
            .with_seed(7)
            .with_exhaustion(ExhaustionPolicy::Reset)
            .with_max_players(4);

        assert_eq!(config.mode, Mode::Couple);
        assert_eq!(config.variant, GameVariant::Bottle);
        assert_eq!(config.difficulty, Difficulty::Hot);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.exhaustion, ExhaustionPolicy::Reset);
        assert_eq!(config.max_players, 4);
    }

    #[test]
    fn test_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.mode, Mode::Friends);
        assert_eq!(config.variant, GameVariant::Classic);
        assert_eq!(config.difficulty, Difficulty::Soft);
        assert_eq!(config.seed, None);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Fallback);
        assert_eq!(config.max_players, DEFAULT_MAX_PLAYERS);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Wheel".parse::<GameVariant>(), Ok(GameVariant::Wheel));
        assert_eq!(" bottle ".parse::<GameVariant>(), Ok(GameVariant::Bottle));
        assert!("dice".parse::<GameVariant>().is_err());
        assert!(GameVariant::Wheel.spins());
        assert!(!GameVariant::Classic.spins());
    }

    #[test]
    fn test_config_serde() {
        let config = SessionConfig::new(Mode::Friends, GameVariant::Wheel, Difficulty::Medium);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"wheel\""));
        let restored: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
