//! Identity provider port
//!
//! The webview runs the provider's popup; the Rust side receives the OAuth
//! credential and exchanges it for a backend session. Sign-out is purely
//! local (clearing the persisted session) and needs no port method.

use async_trait::async_trait;

use crate::auth::{AuthSession, ProviderCredential};
use crate::ports::errors::IdentityError;

#[async_trait]
pub trait IdentityProviderPort: Send + Sync {
    /// Exchange a provider credential for a signed-in session.
    async fn sign_in(&self, credential: &ProviderCredential) -> Result<AuthSession, IdentityError>;

    /// Mint a fresh session from a refresh token.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, IdentityError>;
}
