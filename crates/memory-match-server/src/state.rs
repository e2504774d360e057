use std::sync::Arc;

use crate::config::ServerConfig;
use crate::leaderboard_store::LeaderboardStore;

pub type SharedLeaderboardStore = Arc<LeaderboardStore>;

#[derive(Clone)]
pub struct AppState {
    pub leaderboard: SharedLeaderboardStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            leaderboard: Arc::new(LeaderboardStore::new(config.leaderboard.path.clone())),
            config: Arc::new(config),
        }
    }
}
