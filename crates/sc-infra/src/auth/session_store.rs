//! File-based auth session store
//!
//! Persists the token session between launches. The write is atomic
//! (temp file + rename) so a crash mid-save leaves either the old session
//! or the new one, never a torn file.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use sc_core::auth::AuthSession;
use sc_core::ports::AuthSessionPort;

pub const DEFAULT_SESSION_FILE: &str = "auth_session.json";

pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store at the default file name under a base directory.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create session dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp session failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp session to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl AuthSessionPort for FileSessionStore {
    async fn current(&self) -> Result<Option<AuthSession>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read session failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let session: AuthSession =
            serde_json::from_str(&content).context("parse session failed")?;
        Ok(Some(session))
    }

    async fn store(&self, session: &AuthSession) -> Result<()> {
        let json = serde_json::to_string_pretty(session).context("serialize session failed")?;
        self.atomic_write(&json).await
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(e).with_context(|| format!("remove session failed: {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sc_core::auth::AuthUser;
    use sc_core::ids::UserId;
    use tempfile::TempDir;

    fn session() -> AuthSession {
        AuthSession {
            user: AuthUser {
                uid: UserId::from_str("u1"),
                email: "jane@example.com".into(),
                display_name: Some("Jane".into()),
                photo_url: None,
            },
            id_token: "id-token".into(),
            refresh_token: "refresh-token".into(),
            expires_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_current_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());
        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_and_restore_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());

        store.store(&session()).await.unwrap();
        let restored = store.current().await.unwrap().unwrap();

        assert_eq!(restored, session());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());

        store.store(&session()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(store.current().await.unwrap().is_none());
    }
}
