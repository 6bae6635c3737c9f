use std::sync::Arc;

use anyhow::Context;
use sc_core::auth::ProviderCredential;
use sc_core::guard::post_login_destination;
use sc_core::ports::{AuthSessionPort, IdentityProviderPort, OnboardingStatePort};

use super::SignInDto;

/// Use case for completing a provider sign-in.
///
/// The webview runs the popup and hands over the OAuth credential; this use
/// case exchanges it for a backend session, persists the session, and
/// resolves the post-login destination.
pub struct SignIn {
    identity: Arc<dyn IdentityProviderPort>,
    session: Arc<dyn AuthSessionPort>,
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl SignIn {
    pub fn new(
        identity: Arc<dyn IdentityProviderPort>,
        session: Arc<dyn AuthSessionPort>,
        onboarding_state: Arc<dyn OnboardingStatePort>,
    ) -> Self {
        Self {
            identity,
            session,
            onboarding_state,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        identity: Arc<dyn IdentityProviderPort>,
        session: Arc<dyn AuthSessionPort>,
        onboarding_state: Arc<dyn OnboardingStatePort>,
    ) -> Self {
        Self::new(identity, session, onboarding_state)
    }

    pub async fn execute(
        &self,
        credential: ProviderCredential,
        from: Option<String>,
    ) -> anyhow::Result<SignInDto> {
        let session = self
            .identity
            .sign_in(&credential)
            .await
            .context("identity provider sign-in failed")?;
        self.session.store(&session).await?;

        let onboarding_complete = self.onboarding_state.is_completed().await?;
        let redirect_to = post_login_destination(from.as_deref(), onboarding_complete);

        log::info!("signed in as {}", session.user.email);
        Ok(SignInDto {
            user: session.user,
            redirect_to,
        })
    }
}
