//! TOML-based SessionRepository implementation.
//!
//! Stores each session as an individual TOML file in a sessions directory:
//!
//! ```text
//! base_dir/
//! └── sessions/
//!     ├── <session-id-1>.toml
//!     └── <session-id-2>.toml
//! ```
//!
//! Every save is atomic and fsynced before it is acknowledged, which is
//! the durability property the session store relies on.

use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use pathwise_core::error::{CounselError, Result};
use pathwise_core::session::{Session, SessionRepository};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A repository implementation for storing session data in TOML files.
pub struct TomlSessionRepository {
    base_dir: PathBuf,
}

impl TomlSessionRepository {
    /// Creates a new `TomlSessionRepository` with the specified base
    /// directory, creating the directory structure if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let sessions_dir = base_dir.join("sessions");
        fs::create_dir_all(&sessions_dir)
            .map_err(|e| CounselError::io(format!("Failed to create sessions directory: {}", e)))?;

        Ok(Self { base_dir })
    }

    /// Creates a repository at the default location
    /// (`~/.local/share/pathwise`).
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| CounselError::io("Failed to determine data directory"))?;
        Self::new(data_dir.join("pathwise"))
    }

    /// Returns the file handle for a given session ID.
    fn session_file(&self, session_id: &str) -> AtomicTomlFile<Session> {
        let path = self
            .base_dir
            .join("sessions")
            .join(format!("{}.toml", session_id));
        AtomicTomlFile::new(path)
    }
}

#[async_trait]
impl SessionRepository for TomlSessionRepository {
    async fn find_by_id(&self, session_id: &str) -> Result<Option<Session>> {
        Ok(self.session_file(session_id).load()?)
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.session_file(&session.id).save(session)?;
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        let path = self
            .base_dir
            .join("sessions")
            .join(format!("{}.toml", session_id));

        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                CounselError::io(format!("Failed to delete session file {:?}: {}", path, e))
            })?;
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Session>> {
        let sessions_dir = self.base_dir.join("sessions");
        let mut sessions = Vec::new();

        let entries = fs::read_dir(&sessions_dir)
            .map_err(|e| CounselError::io(format!("Failed to read sessions directory: {}", e)))?;

        for entry in entries {
            let entry =
                entry.map_err(|e| CounselError::io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match AtomicTomlFile::<Session>::new(path.clone()).load() {
                Ok(Some(session)) => sessions.push(session),
                Ok(None) => {}
                Err(e) => {
                    // A single corrupt record should not hide the rest.
                    warn!(path = ?path, error = %e, "skipping unreadable session file");
                }
            }
        }

        // Most recently updated first
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(sessions)
    }
}
