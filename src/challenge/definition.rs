//! The challenge value shown to a player.

use serde::{Deserialize, Serialize};

use super::duration::extract_duration;
use crate::bank::Category;

/// One prompt drawn from the bank.
///
/// Immutable once built; the countdown is derived from the text.
///
/// ```
/// use truth_or_dare::bank::Category;
/// use truth_or_dare::challenge::Challenge;
///
/// let dare = Challenge::new("Fais la planche pendant 30 secondes", Category::Dare);
/// assert_eq!(dare.duration(), Some(30));
/// assert!(dare.is_timed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge {
    text: String,
    category: Category,
    duration: Option<u32>,
}

impl Challenge {
    /// Build a challenge, deriving its countdown from the text.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        let text = text.into();
        let duration = extract_duration(&text);
        Self {
            text,
            category,
            duration,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Countdown in seconds, if the text names one.
    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.duration.is_some()
    }
}

impl std::fmt::Display for Challenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
