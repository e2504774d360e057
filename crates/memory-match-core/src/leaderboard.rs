use serde::{Deserialize, Serialize};

use crate::time::timestamp_now;

/// The persisted leaderboard never holds more than this many entries.
pub const MAX_ENTRIES: usize = 10;

/// One ranked row of the leaderboard document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    /// Tier the score was earned on, as reported by the client.
    pub difficulty: String,
    /// Server-assigned insertion time, `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
}

/// Raw body of a score submission. Every field is optional here so that a
/// missing field is reported as a [`ValidationError`] rather than a decode
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreSubmission {
    pub name: Option<String>,
    pub score: Option<i64>,
    pub difficulty: Option<String>,
}

/// A submission that passed validation but has not been dated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub name: String,
    pub score: i64,
    pub difficulty: String,
}

/// Client input that cannot become a leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not a JSON object of the expected shape (includes a
    /// non-integer `score`).
    Malformed(String),
    MissingField(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(reason) => write!(f, "malformed submission: {reason}"),
            Self::MissingField(field) => write!(f, "missing field `{field}`"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ScoreSubmission {
    /// Decode a request body.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Check that all fields are present. Size is bounded by the request
    /// body limit, not here.
    pub fn validate(self) -> Result<NewScore, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let score = self.score.ok_or(ValidationError::MissingField("score"))?;
        let difficulty = self
            .difficulty
            .ok_or(ValidationError::MissingField("difficulty"))?;

        Ok(NewScore {
            name,
            score,
            difficulty,
        })
    }
}

impl NewScore {
    pub fn stamp(self, date: String) -> LeaderboardEntry {
        LeaderboardEntry {
            name: self.name,
            score: self.score,
            difficulty: self.difficulty,
            date,
        }
    }

    /// Stamp with the current server time.
    pub fn stamp_now(self) -> LeaderboardEntry {
        self.stamp(timestamp_now())
    }
}

/// Insert `entry` into `entries`, re-rank by score descending and keep the
/// top [`MAX_ENTRIES`].
///
/// The sort is stable, so among equal scores the entry that was on the board
/// first keeps the higher rank and a newcomer lands below it.
pub fn rank(mut entries: Vec<LeaderboardEntry>, entry: LeaderboardEntry) -> Vec<LeaderboardEntry> {
    entries.push(entry);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    entries
}
