pub mod card;
pub mod deck;
pub mod difficulty;
pub mod leaderboard;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::leaderboard::LeaderboardEntry;

    /// Build a `medium` entry with a fixed date.
    pub fn make_entry(name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            difficulty: "medium".to_string(),
            date: "2026-01-01 00:00:00".to_string(),
        }
    }

    /// Build a request body for `POST /api/leaderboard`.
    pub fn submission_json(name: &str, score: i64, difficulty: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "score": score,
            "difficulty": difficulty,
        })
    }
}
