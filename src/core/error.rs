//! Error type shared by every module of the engine.
//!
//! Content-data bugs (`InvalidConfiguration`) are hard stops; roster and
//! transition errors are reported back to the front end, which decides how
//! to present them.

use thiserror::Error;

use crate::bank::{Category, Difficulty, Mode};

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TodError>;

/// Errors raised by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodError {
    /// The bank has no content for the requested pool.
    #[error("no {category} challenges defined for mode '{mode}' at difficulty '{difficulty}'")]
    InvalidConfiguration {
        mode: Mode,
        category: Category,
        difficulty: Difficulty,
    },

    /// Fewer than two usable player names.
    #[error("at least 2 players are required, found {found}")]
    InsufficientPlayers { found: usize },

    /// More player names than the session allows.
    #[error("at most {max} players are allowed, found {found}")]
    TooManyPlayers { found: usize, max: usize },

    /// The same display name was entered twice.
    #[error("player '{0}' was entered more than once")]
    DuplicatePlayer(String),

    /// An action was attempted in a round phase that does not accept it.
    #[error("cannot {action} while in the {phase} phase")]
    InvalidTransition {
        phase: &'static str,
        action: &'static str,
    },

    /// A mode, category, difficulty or variant name was not recognised.
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },

    /// The challenge bank could not be decoded.
    #[error("challenge bank format error: {0}")]
    BankFormat(String),

    /// A session snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl TodError {
    /// Creates an `InvalidConfiguration` error for a pool.
    pub fn invalid_pool(mode: Mode, category: Category, difficulty: Difficulty) -> Self {
        Self::InvalidConfiguration {
            mode,
            category,
            difficulty,
        }
    }

    /// Creates an `InvalidTransition` error.
    pub fn transition(phase: &'static str, action: &'static str) -> Self {
        Self::InvalidTransition { phase, action }
    }

    /// Creates an `UnknownName` error.
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            value: value.into(),
        }
    }

    /// True for errors that indicate broken content data rather than a
    /// recoverable user action.
    #[must_use]
    pub fn is_content_bug(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. } | Self::BankFormat(_))
    }
}

impl From<serde_json::Error> for TodError {
    fn from(err: serde_json::Error) -> Self {
        Self::BankFormat(err.to_string())
    }
}

impl From<bincode::Error> for TodError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pool_message() {
        let err = TodError::invalid_pool(Mode::Couple, Category::Dare, Difficulty::Hot);
        assert_eq!(
            err.to_string(),
            "no dare challenges defined for mode 'couple' at difficulty 'hot'"
        );
        assert!(err.is_content_bug());
    }

    #[test]
    fn test_transition_message() {
        let err = TodError::transition("choice", "start the timer");
        assert_eq!(err.to_string(), "cannot start the timer while in the choice phase");
        assert!(!err.is_content_bug());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TodError = json_err.into();
        assert!(matches!(err, TodError::BankFormat(_)));
    }
}
