//! # Application Dependencies
//!
//! This module defines the dependency grouping for use-case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use sc_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Auth dependencies
    pub identity: Arc<dyn IdentityProviderPort>,
    pub session: Arc<dyn AuthSessionPort>,

    // Onboarding dependencies
    pub onboarding_state: Arc<dyn OnboardingStatePort>,

    // Document store dependencies
    pub profiles: Arc<dyn ProfileRepositoryPort>,
    pub companies: Arc<dyn CompanyRepositoryPort>,

    // Storage dependencies
    pub object_storage: Arc<dyn ObjectStoragePort>,
    pub picture_resizer: Arc<dyn PictureResizerPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
