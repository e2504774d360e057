use serde::{Deserialize, Serialize};

use crate::card::CardType;

/// A named difficulty level mapping to a fixed pair count and time limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Static configuration for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSettings {
    /// Number of distinct card types dealt (each appears twice).
    pub pairs: u32,
    /// Seconds the player has to clear the board.
    pub time_secs: u32,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn settings(self) -> TierSettings {
        match self {
            Difficulty::Easy => TierSettings {
                pairs: 6,
                time_secs: 60,
            },
            Difficulty::Medium => TierSettings {
                pairs: 8,
                time_secs: 90,
            },
            Difficulty::Hard => TierSettings {
                pairs: 12,
                time_secs: 120,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Resolve a `?difficulty=` query value. Anything but an exact tier name,
    /// including a missing value, falls back to [`Difficulty::Medium`].
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

// A tier can never ask for more pairs than the catalog holds.
const _: () = {
    let mut i = 0;
    while i < Difficulty::ALL.len() {
        assert!(
            Difficulty::ALL[i].settings().pairs as usize <= CardType::CATALOG.len(),
            "difficulty tier requests more pairs than the card catalog holds"
        );
        i += 1;
    }
};

/// Returned when a string is not one of the tier names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl std::fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown difficulty: {}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
