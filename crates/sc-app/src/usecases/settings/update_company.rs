use std::sync::Arc;

use anyhow::Context;
use sc_core::company::Company;
use sc_core::ports::{
    AuthSessionPort, ClockPort, CompanyRepositoryPort, ProfileRepositoryPort,
};

use crate::usecases::SettingsSaveOutcome;

/// Use case for saving the company settings form.
///
/// Unlike the read path this does NOT lazily create the profile: a save with
/// no profile document means the form was reached without the read ever
/// succeeding, and is reported as an error.
pub struct UpdateCompany {
    session: Arc<dyn AuthSessionPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    companies: Arc<dyn CompanyRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateCompany {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        companies: Arc<dyn CompanyRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            session,
            profiles,
            companies,
            clock,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        companies: Arc<dyn CompanyRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::new(session, profiles, companies, clock)
    }

    pub async fn execute(&self, company: Company) -> anyhow::Result<SettingsSaveOutcome> {
        let errors = company.validate();
        if !errors.is_empty() {
            return Ok(SettingsSaveOutcome::Invalid { errors });
        }

        let session = self
            .session
            .current()
            .await?
            .context("no authenticated user")?;

        let profile = self
            .profiles
            .get(&session.user.uid)
            .await?
            .context("user profile not found")?;
        let company_id = profile.company_id_or_default();

        let mut company = company.normalized();
        company.address.updated_at = Some(self.clock.now());

        self.companies
            .update(&company_id, &company)
            .await
            .context("failed to update company details")?;

        log::info!("company details saved for {}", company_id);
        Ok(SettingsSaveOutcome::Saved)
    }
}
