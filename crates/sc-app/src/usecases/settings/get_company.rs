use std::sync::Arc;

use anyhow::Context;
use sc_core::account::UserProfile;
use sc_core::company::Company;
use sc_core::ports::{AuthSessionPort, CompanyRepositoryPort, ProfileRepositoryPort};

use super::CompanyDto;

/// Use case for loading the company settings form.
///
/// The company id is resolved through the profile (itself lazily created),
/// a missing company document is created with placeholder values, and a
/// legacy address shape found on read is written back in its normalized
/// form so the fix happens exactly once.
pub struct GetCompany {
    session: Arc<dyn AuthSessionPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    companies: Arc<dyn CompanyRepositoryPort>,
}

impl GetCompany {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        companies: Arc<dyn CompanyRepositoryPort>,
    ) -> Self {
        Self {
            session,
            profiles,
            companies,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        companies: Arc<dyn CompanyRepositoryPort>,
    ) -> Self {
        Self::new(session, profiles, companies)
    }

    pub async fn execute(&self) -> anyhow::Result<CompanyDto> {
        let session = self
            .session
            .current()
            .await?
            .context("no authenticated user")?;
        let uid = session.user.uid.clone();

        let profile = match self.profiles.get(&uid).await? {
            Some(profile) => profile,
            None => {
                let profile = UserProfile::initial_for(&session.user);
                self.profiles.create(&uid, &profile).await?;
                profile
            }
        };
        let company_id = profile.company_id_or_default();

        let company = match self.companies.get(&company_id).await? {
            Some(fetch) => {
                if fetch.address_normalized {
                    // Persist the shape fix so future reads get the
                    // structured address directly.
                    self.companies
                        .set_address(&company_id, &fetch.company.address)
                        .await?;
                    log::info!("normalized legacy address for company {}", company_id);
                }
                fetch.company
            }
            None => {
                let company = Company::placeholder();
                self.companies.create(&company_id, &company).await?;
                log::info!("initialized company document {}", company_id);
                company
            }
        };

        Ok(CompanyDto {
            company_id,
            company,
        })
    }
}
