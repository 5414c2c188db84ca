//! Per-player record of challenges already shown.
//!
//! ## SeenChallenges
//!
//! One player's truths and dares, as two persistent sets.
//!
//! ## PlayerHistory
//!
//! Session-wide map from display name to `SeenChallenges`. Histories of
//! different players never share state.
//!
//! Uses `im` persistent sets so snapshots of a session clone in O(1).

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bank::Category;
use crate::core::Roster;

/// Set of challenge texts already shown.
pub type SeenSet = ImHashSet<String>;

/// Truths and dares already shown to a single player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenChallenges {
    truths: SeenSet,
    dares: SeenSet,
}

impl SeenChallenges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts already shown for a category.
    #[must_use]
    pub fn get(&self, category: Category) -> &SeenSet {
        match category {
            Category::Truth => &self.truths,
            Category::Dare => &self.dares,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut SeenSet {
        match category {
            Category::Truth => &mut self.truths,
            Category::Dare => &mut self.dares,
        }
    }

    /// Record a shown text. Returns false if it had been shown before.
    pub fn record(&mut self, category: Category, text: impl Into<String>) -> bool {
        self.get_mut(category).insert(text.into()).is_none()
    }

    /// Check whether a text has been shown.
    #[must_use]
    pub fn contains(&self, category: Category, text: &str) -> bool {
        self.get(category).contains(text)
    }

    /// Forget everything shown for one category.
    pub fn clear(&mut self, category: Category) {
        self.get_mut(category).clear();
    }

    /// Number of distinct texts shown for a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }
}

/// History for every player in a session.
///
/// ## Example
///
/// ```
/// use truth_or_dare::bank::Category;
/// use truth_or_dare::challenge::PlayerHistory;
///
/// let mut history = PlayerHistory::new();
/// history.record("Ana", Category::Truth, "Ton premier baiser ?");
///
/// assert!(history.has_seen("Ana", Category::Truth, "Ton premier baiser ?"));
/// assert!(!history.has_seen("Ben", Category::Truth, "Ton premier baiser ?"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHistory {
    players: FxHashMap<String, SeenChallenges>,
}

impl PlayerHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history entry for every player on the roster.
    #[must_use]
    pub fn for_roster(roster: &Roster) -> Self {
        let players = roster
            .iter()
            .map(|(_, name)| (name.to_string(), SeenChallenges::new()))
            .collect();
        Self { players }
    }

    /// A player's record, if one exists.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&SeenChallenges> {
        self.players.get(name)
    }

    /// A player's record, created on first use.
    pub fn player_mut(&mut self, name: &str) -> &mut SeenChallenges {
        self.players.entry(name.to_string()).or_default()
    }

    /// Record a text as shown to a player.
    pub fn record(&mut self, name: &str, category: Category, text: impl Into<String>) -> bool {
        self.player_mut(name).record(category, text)
    }

    #[must_use]
    pub fn has_seen(&self, name: &str, category: Category, text: &str) -> bool {
        self.player(name)
            .is_some_and(|seen| seen.contains(category, text))
    }

    /// Number of texts a player has seen in a category.
    #[must_use]
    pub fn count(&self, name: &str, category: Category) -> usize {
        self.player(name).map_or(0, |seen| seen.count(category))
    }

    /// Number of players with a record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Forget every player's history while keeping their entries.
    pub fn clear(&mut self) {
        for seen in self.players.values_mut() {
            *seen = SeenChallenges::new();
        }
    }
}
