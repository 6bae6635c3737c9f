//! Document store ports
//!
//! Per-user profile and per-company documents, read and written as whole or
//! partial objects. Implementations map domain structs onto the hosted
//! store's wire format.

use async_trait::async_trait;

use crate::account::{AccountUpdate, UserProfile};
use crate::company::{Address, Company};
use crate::ids::{CompanyId, UserId};
use crate::ports::errors::DocumentStoreError;

#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// Fetch the profile document, `None` when it has never been created.
    async fn get(&self, uid: &UserId) -> Result<Option<UserProfile>, DocumentStoreError>;

    /// Create the profile document with the given contents.
    async fn create(&self, uid: &UserId, profile: &UserProfile)
        -> Result<(), DocumentStoreError>;

    /// Patch only the account-form fields, leaving the rest untouched.
    async fn update_account(
        &self,
        uid: &UserId,
        update: &AccountUpdate,
    ) -> Result<(), DocumentStoreError>;

    /// Patch only the picture URL.
    async fn set_picture(&self, uid: &UserId, url: &str) -> Result<(), DocumentStoreError>;
}

/// A company read, reporting whether a legacy address shape was fixed up.
///
/// When `address_normalized` is true the caller is expected to write the
/// normalized address back so the fix happens once.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyFetch {
    pub company: Company,
    pub address_normalized: bool,
}

#[async_trait]
pub trait CompanyRepositoryPort: Send + Sync {
    /// Fetch the company document, normalizing legacy address shapes.
    async fn get(&self, id: &CompanyId) -> Result<Option<CompanyFetch>, DocumentStoreError>;

    /// Create the company document with the given contents.
    async fn create(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError>;

    /// Patch the company-form fields (name, website, industry, size, address).
    async fn update(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError>;

    /// Patch only the address (used to persist a shape fix-up on read).
    async fn set_address(
        &self,
        id: &CompanyId,
        address: &Address,
    ) -> Result<(), DocumentStoreError>;
}
