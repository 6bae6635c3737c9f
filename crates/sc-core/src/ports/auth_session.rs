//! Auth session port
//!
//! Persists the token session between launches. The browser SDK did this
//! implicitly; the desktop client owns a small file in the app data
//! directory instead.

use async_trait::async_trait;

use crate::auth::AuthSession;

#[async_trait]
pub trait AuthSessionPort: Send + Sync {
    /// The persisted session, if any.
    async fn current(&self) -> anyhow::Result<Option<AuthSession>>;

    /// Persist (or replace) the session.
    async fn store(&self, session: &AuthSession) -> anyhow::Result<()>;

    /// Remove the persisted session.
    async fn clear(&self) -> anyhow::Result<()>;
}
