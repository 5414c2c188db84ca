//! Challenge bank: the read-only content source.
//!
//! The `ChallengeBank` maps (mode, category) to per-difficulty pools of
//! challenge text. It is built once, shared behind an `Arc`, and never
//! mutated by a session.
//!
//! ## JSON layout
//!
//! ```json
//! {
//!   "friends": {
//!     "truths": { "soft": ["..."], "medium": ["..."], "hot": ["..."] },
//!     "dares":  { "soft": ["..."], "medium": ["..."], "hot": ["..."] }
//!   },
//!   "couple": { ... }
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::kinds::{Category, Difficulty, Mode};
use crate::core::{Result, TodError};

type Pools = FxHashMap<Difficulty, Vec<String>>;

/// Registry of challenge pools.
///
/// ## Example
///
/// ```
/// use truth_or_dare::bank::{Category, ChallengeBank, Difficulty, Mode};
///
/// let bank = ChallengeBank::new()
///     .with_pool(Mode::Friends, Category::Truth, Difficulty::Soft, ["Ta pire honte ?"]);
///
/// let pool = bank.pool(Mode::Friends, Category::Truth, Difficulty::Soft).unwrap();
/// assert_eq!(pool.len(), 1);
/// assert!(bank.pool(Mode::Couple, Category::Dare, Difficulty::Hot).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBank", into = "RawBank")]
pub struct ChallengeBank {
    sections: FxHashMap<(Mode, Category), Pools>,
}

impl ChallengeBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a pool, builder style.
    #[must_use]
    pub fn with_pool<I, S>(mut self, mode: Mode, category: Category, difficulty: Difficulty, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_pool(mode, category, difficulty, items);
        self
    }

    /// Add (or replace) a pool.
    pub fn insert_pool<I, S>(&mut self, mode: Mode, category: Category, difficulty: Difficulty, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        self.sections
            .entry((mode, category))
            .or_default()
            .insert(difficulty, items);
    }

    /// Get the pool for a (mode, category, difficulty) triple.
    ///
    /// Fails with `InvalidConfiguration` when the pool is missing or empty.
    pub fn pool(&self, mode: Mode, category: Category, difficulty: Difficulty) -> Result<&[String]> {
        self.sections
            .get(&(mode, category))
            .and_then(|pools| pools.get(&difficulty))
            .filter(|items| !items.is_empty())
            .map(Vec::as_slice)
            .ok_or_else(|| TodError::invalid_pool(mode, category, difficulty))
    }

    /// Check if a non-empty pool exists.
    #[must_use]
    pub fn contains(&self, mode: Mode, category: Category, difficulty: Difficulty) -> bool {
        self.pool(mode, category, difficulty).is_ok()
    }

    /// Ensure both categories are playable for a mode and difficulty.
    pub fn validate_for(&self, mode: Mode, difficulty: Difficulty) -> Result<()> {
        for category in Category::ALL {
            self.pool(mode, category, difficulty)?;
        }
        Ok(())
    }

    /// Every (mode, category, difficulty) combination with no content.
    #[must_use]
    pub fn missing_pools(&self) -> Vec<(Mode, Category, Difficulty)> {
        let mut missing = Vec::new();
        for mode in Mode::ALL {
            for category in Category::ALL {
                for difficulty in Difficulty::ALL {
                    if !self.contains(mode, category, difficulty) {
                        missing.push((mode, category, difficulty));
                    }
                }
            }
        }
        missing
    }

    /// Total number of challenges across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections
            .values()
            .flat_map(|pools| pools.values())
            .map(Vec::len)
            .sum()
    }

    /// Check if the bank holds no challenges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a bank from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let bank: Self = serde_json::from_str(json)?;
        log::debug!("Loaded challenge bank with {} challenges", bank.len());
        Ok(bank)
    }

    /// Serialize the bank to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialized form: one section per mode, one map per category.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct RawSection {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    truths: BTreeMap<Difficulty, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    dares: BTreeMap<Difficulty, Vec<String>>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct RawBank(BTreeMap<Mode, RawSection>);

impl From<RawBank> for ChallengeBank {
    fn from(raw: RawBank) -> Self {
        let mut bank = ChallengeBank::new();
        for (mode, section) in raw.0 {
            for (difficulty, items) in section.truths {
                bank.insert_pool(mode, Category::Truth, difficulty, items);
            }
            for (difficulty, items) in section.dares {
                bank.insert_pool(mode, Category::Dare, difficulty, items);
            }
        }
        bank
    }
}

impl From<ChallengeBank> for RawBank {
    fn from(bank: ChallengeBank) -> Self {
        let mut raw = BTreeMap::<Mode, RawSection>::new();
        for ((mode, category), pools) in bank.sections {
            let section = raw.entry(mode).or_default();
            let target = match category {
                Category::Truth => &mut section.truths,
                Category::Dare => &mut section.dares,
            };
            target.extend(pools);
        }
        RawBank(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChallengeBank {
        ChallengeBank::new()
            .with_pool(Mode::Friends, Category::Truth, Difficulty::Soft, ["t1", "t2"])
            .with_pool(Mode::Friends, Category::Dare, Difficulty::Soft, ["d1"])
    }

    #[test]
    fn test_pool_lookup() {
        let bank = sample();
        assert_eq!(
            bank.pool(Mode::Friends, Category::Truth, Difficulty::Soft).unwrap(),
            &["t1".to_string(), "t2".to_string()]
        );
        assert_eq!(bank.len(), 3);
        assert!(!bank.is_empty());
    }

    #[test]
    fn test_missing_pool_is_invalid_configuration() {
        let bank = sample();
        assert_eq!(
            bank.pool(Mode::Friends, Category::Dare, Difficulty::Hot),
            Err(TodError::invalid_pool(Mode::Friends, Category::Dare, Difficulty::Hot))
        );
    }

    #[test]
    fn test_empty_pool_is_invalid_configuration() {
        let bank = ChallengeBank::new().with_pool(
            Mode::Couple,
            Category::Truth,
            Difficulty::Medium,
            Vec::<String>::new(),
        );
        assert!(bank.pool(Mode::Couple, Category::Truth, Difficulty::Medium).is_err());
        assert!(bank.is_empty());
    }

    #[test]
    fn test_validate_for() {
        let bank = sample();
        assert!(bank.validate_for(Mode::Friends, Difficulty::Soft).is_ok());
        assert!(bank.validate_for(Mode::Friends, Difficulty::Medium).is_err());
    }

    #[test]
    fn test_missing_pools() {
        let bank = sample();
        let missing = bank.missing_pools();
        // 2 modes * 2 categories * 3 tiers, minus the two defined pools
        assert_eq!(missing.len(), 10);
        assert!(!missing.contains(&(Mode::Friends, Category::Truth, Difficulty::Soft)));
    }

    #[test]
    fn test_replace_pool() {
        let mut bank = sample();
        bank.insert_pool(Mode::Friends, Category::Dare, Difficulty::Soft, ["d9"]);
        assert_eq!(
            bank.pool(Mode::Friends, Category::Dare, Difficulty::Soft).unwrap(),
            &["d9".to_string()]
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "friends": {
                "truths": { "soft": ["a", "b"] },
                "dares": { "hot": ["c"] }
            }
        }"#;
        let bank = ChallengeBank::from_json(json).unwrap();
        assert!(bank.contains(Mode::Friends, Category::Truth, Difficulty::Soft));
        assert!(bank.contains(Mode::Friends, Category::Dare, Difficulty::Hot));
        assert!(!bank.contains(Mode::Couple, Category::Truth, Difficulty::Soft));
    }

    #[test]
    fn test_from_json_rejects_unknown_tier() {
        let json = r#"{ "friends": { "truths": { "extreme": ["a"] } } }"#;
        assert!(matches!(ChallengeBank::from_json(json), Err(TodError::BankFormat(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let bank = sample();
        let json = bank.to_json().unwrap();
        assert_eq!(ChallengeBank::from_json(&json).unwrap(), bank);
    }
}
