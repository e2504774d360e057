use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use memory_match_core::leaderboard::{LeaderboardEntry, rank};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Failure reading or writing the leaderboard document.
#[derive(Debug)]
pub enum StoreError {
    /// The document exists but is not a JSON array of entries. It is left
    /// untouched so nothing is lost.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupt { path, source } => {
                write!(f, "leaderboard {} is corrupt: {source}", path.display())
            },
            Self::Io { path, source } => {
                write!(f, "leaderboard I/O on {} failed: {source}", path.display())
            },
            Self::Encode(source) => write!(f, "failed to encode leaderboard: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corrupt { source, .. } | Self::Encode(source) => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// File-backed top-10 leaderboard.
///
/// The whole document is read, re-ranked and rewritten on every submission.
/// Submissions are serialized by an internal lock, and writes replace the
/// file by rename so readers only ever see a complete document.
pub struct LeaderboardStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current ranked entries. A missing document is an empty board.
    pub async fn list_top(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.read().await
    }

    /// Rank `entry` into the board and persist the result.
    ///
    /// The document is rewritten even when `entry` does not make the cut.
    /// Returns the board as written.
    pub async fn submit(
        &self,
        entry: LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let current = self.read().await?;
        let board = rank(current, entry);
        self.write(&board).await?;
        Ok(board)
    }

    async fn read(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    async fn write(&self, board: &[LeaderboardEntry]) -> Result<(), StoreError> {
        let data = serde_json::to_vec(board).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let tmp = self.tmp_path();
        if let Err(e) = self.replace_via(&tmp, &data).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(self.io_error(e));
        }

        tracing::debug!(
            path = %self.path.display(),
            entries = board.len(),
            "Leaderboard written"
        );
        Ok(())
    }

    /// Write `data` to `tmp`, flush it to disk and move it over the document.
    async fn replace_via(&self, tmp: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(tmp).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(tmp, &self.path).await
    }

    /// Sibling of the document, so the rename never crosses filesystems.
    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "leaderboard".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
