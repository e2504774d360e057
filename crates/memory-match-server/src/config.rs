use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "memory-match.toml";

/// Top-level server configuration, loaded from `memory-match.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub web_root: String,
    pub leaderboard: LeaderboardConfig,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            web_root: "web".to_string(),
            leaderboard: LeaderboardConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Where the leaderboard document lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub path: PathBuf,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("leaderboard.json"),
        }
    }
}

/// Request limits applied to every route.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub request_timeout_secs: u64,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            max_body_bytes: 4096,
        }
    }
}

/// A configuration value the server cannot start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidListenAddr(String),
    EmptyLeaderboardPath,
    ZeroLimit(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidListenAddr(addr) => {
                write!(f, "listen_addr `{addr}` is not a valid socket address")
            },
            Self::EmptyLeaderboardPath => write!(f, "leaderboard.path must not be empty"),
            Self::ZeroLimit(name) => write!(f, "limits.{name} must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Check values that would otherwise fail later at bind or request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidListenAddr(self.listen_addr.clone()));
        }
        if self.leaderboard.path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLeaderboardPath);
        }
        if self.limits.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroLimit("request_timeout_secs"));
        }
        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::ZeroLimit("max_body_bytes"));
        }

        if Path::new(&self.web_root).is_dir() {
            tracing::debug!(web_root = %self.web_root, "Serving static files");
        } else {
            tracing::warn!(
                web_root = %self.web_root,
                "web_root does not exist, static pages will return 404"
            );
        }
        Ok(())
    }

    /// Load config from `memory-match.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = Self::load_file(Path::new(CONFIG_FILE));
        config.apply_env_overrides();
        config
    }

    /// Parse a config file, falling back to defaults if it is missing or
    /// malformed.
    pub fn load_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    cfg
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse config: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!(path = %path.display(), "No config file found, using defaults");
                ServerConfig::default()
            },
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("MEMORY_MATCH_LISTEN_ADDR")
            && !addr.is_empty()
        {
            self.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("MEMORY_MATCH_WEB_ROOT")
            && !root.is_empty()
        {
            self.web_root = root;
        }
        if let Ok(path) = std::env::var("MEMORY_MATCH_LEADERBOARD_PATH")
            && !path.is_empty()
        {
            self.leaderboard.path = PathBuf::from(path);
        }
        if let Ok(val) = std::env::var("MEMORY_MATCH_REQUEST_TIMEOUT_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            self.limits.request_timeout_secs = n;
        }
        if let Ok(val) = std::env::var("MEMORY_MATCH_MAX_BODY_BYTES")
            && let Ok(n) = val.parse::<usize>()
        {
            self.limits.max_body_bytes = n;
        }
    }
}
