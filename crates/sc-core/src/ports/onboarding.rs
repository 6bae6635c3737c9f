//! Onboarding state port
//!
//! This port defines the contract for persisting and retrieving onboarding
//! progress. Implementations are provided by the infrastructure layer
//! (file-based storage in the app data directory).
//!
//! The record blob and the completion flag are separate durable keys: the
//! route guard only ever needs the flag.

use async_trait::async_trait;

use crate::onboarding::OnboardingRecord;

#[async_trait]
pub trait OnboardingStatePort: Send + Sync {
    /// Get the persisted record, `None` when onboarding has never started.
    async fn get_record(&self) -> anyhow::Result<Option<OnboardingRecord>>;

    /// Persist the record.
    async fn set_record(&self, record: &OnboardingRecord) -> anyhow::Result<()>;

    /// Whether the completion flag is set.
    async fn is_completed(&self) -> anyhow::Result<bool>;

    /// Set or clear the completion flag.
    async fn set_completed(&self, completed: bool) -> anyhow::Result<()>;

    /// Drop the record and the flag (sign-out or re-onboarding).
    async fn reset(&self) -> anyhow::Result<()>;
}
