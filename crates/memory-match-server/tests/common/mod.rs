use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use memory_match_server::build_app;
use memory_match_server::config::{LeaderboardConfig, ServerConfig};

pub struct TestServer {
    pub addr: SocketAddr,
    pub leaderboard_path: PathBuf,
    pub web_root: PathBuf,
    _dir: tempfile::TempDir,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose leaderboard and web root live in a fresh temp dir.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Start a server after letting the caller adjust the config.
    pub async fn with_config(adjust: impl FnOnce(&mut ServerConfig)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let leaderboard_path = dir.path().join("leaderboard.json");
        let web_root = dir.path().join("web");
        std::fs::create_dir_all(&web_root).unwrap();

        let mut config = ServerConfig {
            listen_addr: "127.0.0.1:0".to_string(),
            web_root: web_root.to_string_lossy().into_owned(),
            leaderboard: LeaderboardConfig {
                path: leaderboard_path.clone(),
            },
            ..ServerConfig::default()
        };
        adjust(&mut config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            leaderboard_path,
            web_root,
            _dir: dir,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

/// POST a score and return the response.
pub async fn submit_score(
    client: &reqwest::Client,
    server: &TestServer,
    name: &str,
    score: i64,
    difficulty: &str,
) -> reqwest::Response {
    client
        .post(server.url("/api/leaderboard"))
        .json(&memory_match_core::test_helpers::submission_json(
            name, score, difficulty,
        ))
        .send()
        .await
        .unwrap()
}

/// GET the leaderboard as raw JSON entries.
pub async fn fetch_leaderboard(
    client: &reqwest::Client,
    server: &TestServer,
) -> Vec<serde_json::Value> {
    let resp = client
        .get(server.url("/api/leaderboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}
