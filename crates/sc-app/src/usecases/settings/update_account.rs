use std::sync::Arc;

use anyhow::Context;
use sc_core::account::AccountUpdate;
use sc_core::ports::{AuthSessionPort, ProfileRepositoryPort};

use crate::usecases::SettingsSaveOutcome;

/// Use case for saving the account settings form.
///
/// Patches only the account-form fields so the rest of the profile document
/// (role, interests, company association) survives the save.
pub struct UpdateAccount {
    session: Arc<dyn AuthSessionPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl UpdateAccount {
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

    pub async fn execute(&self, update: AccountUpdate) -> anyhow::Result<SettingsSaveOutcome> {
        let errors = update.validate();
        if !errors.is_empty() {
            return Ok(SettingsSaveOutcome::Invalid { errors });
        }

        let session = self
            .session
            .current()
            .await?
            .context("no authenticated user")?;

        self.profiles
            .update_account(&session.user.uid, &update)
            .await
            .context("failed to update user account data")?;

        log::info!("account settings saved for {}", session.user.uid);
        Ok(SettingsSaveOutcome::Saved)
    }
}
