//! Vocabulary of the challenge bank: modes, categories, difficulty tiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::TodError;

/// Game flavour, selecting which section of the bank is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Friends,
    Couple,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Friends, Mode::Couple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Friends => "friends",
            Mode::Couple => "couple",
        }
    }
}

/// The two kinds of challenge a player can pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Truth,
    Dare,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Truth, Category::Dare];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Truth => "truth",
            Category::Dare => "dare",
        }
    }

    /// Key of this category's section in bank JSON.
    pub fn plural(&self) -> &'static str {
        match self {
            Category::Truth => "truths",
            Category::Dare => "dares",
        }
    }
}

/// Content intensity tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Soft,
    Medium,
    Hot,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Soft, Difficulty::Medium, Difficulty::Hot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Soft => "soft",
            Difficulty::Medium => "medium",
            Difficulty::Hot => "hot",
        }
    }

    /// Badge text shown next to the current player.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Soft => "Soft",
            Difficulty::Medium => "Medium",
            Difficulty::Hot => "HOT",
        }
    }
}

macro_rules! impl_name_traits {
    ($ty:ty, $kind:literal, { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = TodError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(TodError::unknown($kind, s)),
                }
            }
        }
    };
}

impl_name_traits!(Mode, "mode", {
    "friends" => Mode::Friends,
    "couple" => Mode::Couple,
});

impl_name_traits!(Category, "category", {
    "truth" => Category::Truth,
    "truths" => Category::Truth,
    "dare" => Category::Dare,
    "dares" => Category::Dare,
});

impl_name_traits!(Difficulty, "difficulty", {
    "soft" => Difficulty::Soft,
    "medium" => Difficulty::Medium,
    "med" => Difficulty::Medium,
    "hot" => Difficulty::Hot,
});
