//! # Use Cases Accessor
//!
//! This module provides the `UseCases` accessor which is attached to
//! `AppRuntime` to provide convenient access to all use cases with their
//! dependencies pre-wired.
//!
//! ## Architecture
//!
//! - **sc-app/usecases**: Pure use cases with `new()` constructors taking ports
//! - **sc-tauri/bootstrap**: This module wires `Arc<dyn Port>` from AppDeps
//!   into use cases
//! - **Commands**: Call `runtime.usecases().xxx()` to get use case instances
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure the use case has a `from_ports()` constructor taking its ports
//! 2. Add a method to `UseCases` that calls it with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use sc_app::usecases::{
    GetAccount, GetAuthSession, GetCompany, GetOnboardingState, GoBackOnboardingStep,
    ResetOnboarding, ResolveRoute, SignIn, SignOut, SubmitOnboardingStep, UpdateAccount,
    UpdateCompany, UploadProfilePicture,
};
use sc_app::AppDeps;

/// Application runtime with dependencies.
///
/// The `AppRuntime` is the central point for accessing all application
/// dependencies and use cases. It wraps `AppDeps` and provides a
/// `usecases()` method that returns a `UseCases` accessor. Tauri manages an
/// `Arc<AppRuntime>` in its state.
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
}

impl AppRuntime {
    /// Create a new AppRuntime from dependencies.
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    /// Access use cases with dependencies pre-wired.
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { deps: &self.deps }
    }
}

/// Accessor that constructs use cases on demand from the runtime's deps.
///
/// Use cases are cheap bundles of `Arc` clones; constructing one per
/// command invocation keeps the runtime free of caching concerns.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl UseCases<'_> {
    // ===== Auth =====

    pub fn sign_in(&self) -> SignIn {
        SignIn::from_ports(
            self.deps.identity.clone(),
            self.deps.session.clone(),
            self.deps.onboarding_state.clone(),
        )
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::from_ports(
            self.deps.session.clone(),
            self.deps.onboarding_state.clone(),
        )
    }

    pub fn get_auth_session(&self) -> GetAuthSession {
        GetAuthSession::from_ports(
            self.deps.session.clone(),
            self.deps.identity.clone(),
            self.deps.clock.clone(),
        )
    }

    // ===== Route guard =====

    pub fn resolve_route(&self) -> ResolveRoute {
        ResolveRoute::from_ports(
            self.deps.session.clone(),
            self.deps.onboarding_state.clone(),
        )
    }

    // ===== Onboarding =====

    pub fn get_onboarding_state(&self) -> GetOnboardingState {
        GetOnboardingState::from_ports(
            self.deps.onboarding_state.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn submit_onboarding_step(&self) -> SubmitOnboardingStep {
        SubmitOnboardingStep::from_ports(
            self.deps.onboarding_state.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn go_back_onboarding_step(&self) -> GoBackOnboardingStep {
        GoBackOnboardingStep::from_ports(
            self.deps.onboarding_state.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn reset_onboarding(&self) -> ResetOnboarding {
        ResetOnboarding::from_ports(self.deps.onboarding_state.clone())
    }

    // ===== Settings =====

    pub fn get_account(&self) -> GetAccount {
        GetAccount::from_ports(self.deps.session.clone(), self.deps.profiles.clone())
    }

    pub fn update_account(&self) -> UpdateAccount {
        UpdateAccount::from_ports(self.deps.session.clone(), self.deps.profiles.clone())
    }

    pub fn get_company(&self) -> GetCompany {
        GetCompany::from_ports(
            self.deps.session.clone(),
            self.deps.profiles.clone(),
            self.deps.companies.clone(),
        )
    }

    pub fn update_company(&self) -> UpdateCompany {
        UpdateCompany::from_ports(
            self.deps.session.clone(),
            self.deps.profiles.clone(),
            self.deps.companies.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn upload_profile_picture(&self) -> UploadProfilePicture {
        UploadProfilePicture::from_ports(
            self.deps.session.clone(),
            self.deps.picture_resizer.clone(),
            self.deps.object_storage.clone(),
            self.deps.profiles.clone(),
        )
    }
}
