//! No-repeat challenge selection.
//!
//! ## Contract
//!
//! `available = pool - seen`. A non-empty `available` is sampled uniformly;
//! an exhausted pool falls back to a uniform pick from the whole pool.
//! `select_challenge` is pure apart from the RNG; `ChallengeSelector` adds
//! the exhaustion policy and records the pick in the player's history.

use smallvec::SmallVec;

use super::definition::Challenge;
use super::history::{PlayerHistory, SeenSet};
use crate::bank::{Category, ChallengeBank, Difficulty, Mode};
use crate::core::{ExhaustionPolicy, GameRng, Result, TodError};

/// Result of sampling a single pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw<'a> {
    /// Chosen text, borrowed from the pool.
    pub text: &'a str,
    /// True when every pool item had already been seen.
    pub exhausted: bool,
}

/// Sample one text from `pool`, preferring texts not in `seen`.
///
/// Returns `None` only for an empty pool.
pub fn draw<'a>(pool: &'a [String], seen: &SeenSet, rng: &mut GameRng) -> Option<Draw<'a>> {
    // Pools are a few dozen entries; keep the candidates on the stack.
    let available: SmallVec<[&'a str; 32]> = pool
        .iter()
        .map(String::as_str)
        .filter(|text| !seen.contains(*text))
        .collect();

    if let Some(&text) = rng.choose(&available) {
        return Some(Draw {
            text,
            exhausted: false,
        });
    }

    rng.choose(pool).map(|text| Draw {
        text: text.as_str(),
        exhausted: true,
    })
}

/// Pick a challenge for one player without mutating anything.
///
/// Fails with `InvalidConfiguration` when the bank has no content for the
/// requested pool. The caller records the returned text before the next call.
///
/// ```
/// use truth_or_dare::bank::{Category, ChallengeBank, Difficulty, Mode};
/// use truth_or_dare::challenge::{select_challenge, SeenSet};
/// use truth_or_dare::core::GameRng;
///
/// let bank = ChallengeBank::new()
///     .with_pool(Mode::Friends, Category::Truth, Difficulty::Soft, ["a", "b"]);
/// let mut seen = SeenSet::new();
/// seen.insert("a".to_string());
///
/// let mut rng = GameRng::new(1);
/// let challenge = select_challenge(
///     &bank, Mode::Friends, Difficulty::Soft, Category::Truth, &seen, &mut rng,
/// ).unwrap();
/// assert_eq!(challenge.text(), "b");
/// ```
pub fn select_challenge(
    bank: &ChallengeBank,
    mode: Mode,
    difficulty: Difficulty,
    category: Category,
    seen: &SeenSet,
    rng: &mut GameRng,
) -> Result<Challenge> {
    let pool = bank.pool(mode, category, difficulty)?;
    let picked = draw(pool, seen, rng)
        .ok_or_else(|| TodError::invalid_pool(mode, category, difficulty))?;
    Ok(Challenge::new(picked.text, category))
}

/// Selection with history bookkeeping and an exhaustion policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChallengeSelector {
    policy: ExhaustionPolicy,
}

impl ChallengeSelector {
    #[must_use]
    pub fn new(policy: ExhaustionPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Pick a challenge for `player` and record it in `history`.
    #[allow(clippy::too_many_arguments)]
    pub fn select_for(
        &self,
        bank: &ChallengeBank,
        mode: Mode,
        difficulty: Difficulty,
        category: Category,
        player: &str,
        history: &mut PlayerHistory,
        rng: &mut GameRng,
    ) -> Result<Challenge> {
        let pool = bank.pool(mode, category, difficulty)?;
        let seen = history.player_mut(player);

        let picked = draw(pool, seen.get(category), rng)
            .ok_or_else(|| TodError::invalid_pool(mode, category, difficulty))?;

        if picked.exhausted {
            match self.policy {
                ExhaustionPolicy::Fallback => {
                    log::warn!(
                        "{} has seen all {} {} {} challenges, repeats allowed",
                        player,
                        pool.len(),
                        difficulty,
                        category
                    );
                }
                ExhaustionPolicy::Reset => {
                    log::info!(
                        "{} has seen all {} {} {} challenges, starting a new cycle",
                        player,
                        pool.len(),
                        difficulty,
                        category
                    );
                    seen.clear(category);
                }
            }
        }

        seen.record(category, picked.text);
        log::debug!("{} drew {}: {:?}", player, category, picked.text);

        Ok(Challenge::new(picked.text, category))
    }
}
