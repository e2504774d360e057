use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub leaderboard: LeaderboardInfo,
}

#[derive(Serialize)]
pub struct LeaderboardInfo {
    /// `None` when the document cannot be read.
    pub entries: Option<usize>,
}

/// Reports `healthy` while the leaderboard document is readable and
/// `degraded` otherwise. Always answers 200 so the reason is visible.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, entries) = match state.leaderboard.list_top().await {
        Ok(board) => ("healthy", Some(board.len())),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read leaderboard");
            ("degraded", None)
        },
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        leaderboard: LeaderboardInfo { entries },
    })
}
