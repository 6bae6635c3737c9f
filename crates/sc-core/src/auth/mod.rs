//! Authentication domain models
//!
//! The identity provider owns the user; this module only mirrors the
//! signed-in identity and the token session the desktop client keeps
//! between launches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Locally persisted token session.
///
/// The browser SDK kept this in IndexedDB; the desktop client persists it in
/// the app data directory and refreshes the ID token when it expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the ID token is past (or within a minute of) expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now + chrono::Duration::seconds(60)
    }
}

/// Auth state as seen by the route guard.
///
/// `Loading` covers the window between startup and the session restore
/// finishing; the guard renders a neutral waiting state for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuthStatus {
    Loading,
    SignedOut,
    SignedIn(AuthUser),
}

impl AuthStatus {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthStatus::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Credential handed over by the webview after the provider popup completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCredential {
    /// OAuth ID token issued by the provider (Google).
    pub id_token: String,
}
