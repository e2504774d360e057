use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Serialize;

use memory_match_core::deck::{Deck, generate_deck};
use memory_match_core::difficulty::Difficulty;
use memory_match_core::leaderboard::{LeaderboardEntry, ScoreSubmission};

use crate::error::AppError;
use crate::state::AppState;

/// Response for an accepted score.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}

/// GET /api/cards: deal a shuffled deck.
///
/// Query pairs are taken raw so a repeated or odd `difficulty` never fails
/// the request; the first occurrence wins and anything unknown means medium.
pub async fn get_cards(Query(params): Query<Vec<(String, String)>>) -> Json<Deck> {
    let requested = params
        .iter()
        .find(|(key, _)| key == "difficulty")
        .map(|(_, value)| value.as_str());
    let difficulty = Difficulty::from_query(requested);
    Json(generate_deck(difficulty, &mut rand::rng()))
}

/// GET /api/leaderboard: ranked entries, best first.
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    Ok(Json(state.leaderboard.list_top().await?))
}

/// POST /api/leaderboard: record a finished game.
pub async fn post_leaderboard(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let score = ScoreSubmission::from_json(&body)?.validate()?;
    let entry = score.stamp_now();

    let board = state.leaderboard.submit(entry.clone()).await?;
    // equal entries rank in submission order, so the newest is the last match
    let rank = board.iter().rposition(|e| *e == entry).map(|i| i + 1);
    tracing::info!(name = %entry.name, score = entry.score, ?rank, "Score submitted");

    Ok(Json(SubmitResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LeaderboardConfig, ServerConfig};
    use memory_match_core::test_helpers::submission_json;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        AppState::new(ServerConfig {
            leaderboard: LeaderboardConfig {
                path: dir.path().join("leaderboard.json"),
            },
            ..ServerConfig::default()
        })
    }

    fn query(pairs: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
        Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn body(value: serde_json::Value) -> Bytes {
        Bytes::from(serde_json::to_vec(&value).unwrap())
    }

    #[tokio::test]
    async fn cards_follow_requested_difficulty() {
        let Json(deck) = get_cards(query(&[("difficulty", "hard")])).await;
        assert_eq!(deck.cards.len(), 24);
        assert_eq!(deck.game_time, 120);

        let Json(deck) = get_cards(query(&[("difficulty", "easy")])).await;
        assert_eq!(deck.cards.len(), 12);
        assert_eq!(deck.game_time, 60);
    }

    #[tokio::test]
    async fn cards_default_to_medium() {
        for params in [
            vec![],
            vec![("difficulty", "impossible")],
            vec![("level", "hard")],
        ] {
            let Json(deck) = get_cards(query(&params)).await;
            assert_eq!(deck.cards.len(), 16, "params {params:?}");
            assert_eq!(deck.game_time, 90);
        }
    }

    #[tokio::test]
    async fn first_difficulty_wins() {
        let Json(deck) = get_cards(query(&[("difficulty", "easy"), ("difficulty", "hard")])).await;
        assert_eq!(deck.game_time, 60);
    }

    #[tokio::test]
    async fn empty_leaderboard_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let Json(board) = get_leaderboard(State(state_in(&dir))).await.unwrap();
        assert!(board.is_empty());
    }

    #[tokio::test]
    async fn submit_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);

        let Json(resp) = post_leaderboard(
            State(state.clone()),
            body(submission_json("A", 50, "easy")),
        )
        .await
        .unwrap();
        assert!(resp.success);
        let Json(resp) =
            post_leaderboard(State(state.clone()), body(submission_json("B", 90, "hard")))
                .await
                .unwrap();
        assert!(resp.success);

        let Json(board) = get_leaderboard(State(state)).await.unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!((board[0].name.as_str(), board[0].score), ("B", 90));
        assert_eq!(board[0].difficulty, "hard");
        assert_eq!((board[1].name.as_str(), board[1].score), ("A", 50));
        assert_eq!(board[1].date.len(), 19);
    }

    #[tokio::test]
    async fn missing_field_rejected_without_write() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);

        let result = post_leaderboard(
            State(state.clone()),
            body(serde_json::json!({ "name": "A", "score": 10 })),
        )
        .await;
        assert!(matches!(result.unwrap_err(), AppError::BadRequest(m) if m == "Invalid data"));
        assert!(!state.leaderboard.path().exists());
    }

    #[tokio::test]
    async fn invalid_submission_leaves_existing_board_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        post_leaderboard(State(state.clone()), body(submission_json("A", 50, "easy")))
            .await
            .unwrap();
        let before = std::fs::read(state.leaderboard.path()).unwrap();

        let result = post_leaderboard(
            State(state.clone()),
            body(serde_json::json!({ "name": "B", "difficulty": "hard" })),
        )
        .await;
        assert!(matches!(result.unwrap_err(), AppError::BadRequest(m) if m == "Invalid data"));
        assert_eq!(std::fs::read(state.leaderboard.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn garbage_body_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = post_leaderboard(State(state_in(&dir)), Bytes::from_static(b"name=A")).await;
        assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn corrupt_document_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(&dir);
        std::fs::write(state.leaderboard.path(), b"[{]").unwrap();

        let listed = get_leaderboard(State(state.clone())).await;
        assert!(matches!(listed.unwrap_err(), AppError::Internal(_)));

        let submitted =
            post_leaderboard(State(state.clone()), body(submission_json("A", 1, "easy"))).await;
        assert!(matches!(submitted.unwrap_err(), AppError::Internal(_)));
        assert_eq!(std::fs::read(state.leaderboard.path()).unwrap(), b"[{]");
    }
}
