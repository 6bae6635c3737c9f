use std::sync::Arc;

use anyhow::Context;
use sc_core::account::UserProfile;
use sc_core::ports::{AuthSessionPort, ProfileRepositoryPort};

/// Use case for loading the account settings form.
///
/// Fetch-if-missing: a user with no profile document gets one initialized
/// from identity-provider defaults and the placeholder company association
/// before anything is returned.
pub struct GetAccount {
    session: Arc<dyn AuthSessionPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl GetAccount {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
    ) -> Self {
        Self { session, profiles }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
    ) -> Self {
        Self::new(session, profiles)
    }

    pub async fn execute(&self) -> anyhow::Result<UserProfile> {
        let session = self
            .session
            .current()
            .await?
            .context("no authenticated user")?;
        let uid = session.user.uid.clone();

        match self.profiles.get(&uid).await? {
            Some(profile) => Ok(profile),
            None => {
                let profile = UserProfile::initial_for(&session.user);
                self.profiles.create(&uid, &profile).await?;
                log::info!("initialized profile document for {}", uid);
                Ok(profile)
            }
        }
    }
}
