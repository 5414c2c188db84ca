//! Player identification and roster validation.
//!
//! ## PlayerId
//!
//! Seat index into the roster (0-based). Turn order and spins work on ids;
//! history is keyed by display name.
//!
//! ## Roster
//!
//! Ordered list of validated display names, fixed for the whole session.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::{Result, TodError};

/// Default upper bound on players, matching the entry form.
pub const DEFAULT_MAX_PLAYERS: usize = 10;

/// Minimum number of players for a session.
pub const MIN_PLAYERS: usize = 2;

/// Seat index of a player in the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for `player_count` players.
    ///
    /// ```
    /// use truth_or_dare::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Validated, ordered list of player names.
///
/// ```
/// use truth_or_dare::core::{PlayerId, Roster};
///
/// let roster = Roster::from_names(["Alice", "  ", " Bob "]).unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(&roster[PlayerId::new(1)], "Bob");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster with the default player limit.
    ///
    /// Names are trimmed and blank entries dropped before counting.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_limit(names, DEFAULT_MAX_PLAYERS)
    }

    /// Build a roster allowing at most `max` players.
    pub fn with_limit<I, S>(names: I, max: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut valid: Vec<String> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if valid.iter().any(|n| n == trimmed) {
                return Err(TodError::DuplicatePlayer(trimmed.to_string()));
            }
            valid.push(trimmed.to_string());
        }

        if valid.len() < MIN_PLAYERS {
            return Err(TodError::InsufficientPlayers { found: valid.len() });
        }
        let max = max.min(u8::MAX as usize);
        if valid.len() > max {
            return Err(TodError::TooManyPlayers {
                found: valid.len(),
                max,
            });
        }

        Ok(Self { names: valid })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated roster; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name of a player, if the id is in range.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    /// Look up a player by display name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| PlayerId(i as u8))
    }

    /// Iterate over (PlayerId, name) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (PlayerId(i as u8), n.as_str()))
    }

    /// All player IDs in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.names.len())
    }
}

impl Index<PlayerId> for Roster {
    type Output = str;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.names[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_roster_trims_and_skips_blank() {
        let roster = Roster::from_names(["  Ana", "", "Ben  ", "\t"]).unwrap();
        let names: Vec<_> = roster.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Ana", "Ben"]);
    }

    #[test]
    fn test_roster_requires_two_players() {
        assert_eq!(
            Roster::from_names(["Solo", " "]),
            Err(TodError::InsufficientPlayers { found: 1 })
        );
        assert_eq!(
            Roster::from_names(Vec::<String>::new()),
            Err(TodError::InsufficientPlayers { found: 0 })
        );
    }

    #[test]
    fn test_roster_limit() {
        let names: Vec<String> = (0..11).map(|i| format!("P{i}")).collect();
        assert_eq!(
            Roster::from_names(&names),
            Err(TodError::TooManyPlayers { found: 11, max: 10 })
        );
        assert!(Roster::with_limit(&names, 12).is_ok());
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        assert_eq!(
            Roster::from_names(["Ana", "Ben", " Ana "]),
            Err(TodError::DuplicatePlayer("Ana".to_string()))
        );
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::from_names(["Ana", "Ben", "Cleo"]).unwrap();
        assert_eq!(roster.find("Cleo"), Some(PlayerId::new(2)));
        assert_eq!(roster.find("Dan"), None);
        assert_eq!(roster.name(PlayerId::new(1)), Some("Ben"));
        assert_eq!(roster.name(PlayerId::new(7)), None);
        assert_eq!(&roster[PlayerId::new(0)], "Ana");
        assert_eq!(roster.player_ids().count(), 3);
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::from_names(["Ana", "Ben"]).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let restored: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, restored);
    }
}
