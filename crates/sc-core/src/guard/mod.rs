//! Route guard.
//!
//! Pure decision function for gating protected views: nothing here performs
//! navigation, it only tells the shell what to do with a requested path.

use serde::{Deserialize, Serialize};

use crate::auth::AuthStatus;

pub const LOGIN_PATH: &str = "/login";
pub const ONBOARDING_PATH: &str = "/onboarding";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What the shell should do with a requested path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Auth state not known yet; render a neutral waiting state.
    Wait,
    /// Not signed in; go to login, remembering where the user wanted to be.
    RedirectToLogin { from: String },
    /// Signed in but onboarding incomplete; the wizard comes first.
    RedirectToOnboarding,
    /// Render the requested view.
    Allow,
}

/// Resolve a requested path against the current auth and onboarding state.
pub fn resolve_route(auth: &AuthStatus, onboarding_complete: bool, path: &str) -> RouteDecision {
    match auth {
        AuthStatus::Loading => RouteDecision::Wait,
        AuthStatus::SignedOut => RouteDecision::RedirectToLogin {
            from: path.to_string(),
        },
        AuthStatus::SignedIn(_) => {
            if !onboarding_complete && !is_exempt_from_onboarding(path) {
                RouteDecision::RedirectToOnboarding
            } else {
                RouteDecision::Allow
            }
        }
    }
}

/// Where to land after a successful sign-in: the preserved path wins,
/// otherwise the dashboard or the wizard depending on onboarding state.
pub fn post_login_destination(saved_from: Option<&str>, onboarding_complete: bool) -> String {
    match saved_from {
        Some(from) if !from.is_empty() && from != LOGIN_PATH => from.to_string(),
        _ if onboarding_complete => DASHBOARD_PATH.to_string(),
        _ => ONBOARDING_PATH.to_string(),
    }
}

fn is_exempt_from_onboarding(path: &str) -> bool {
    path == ONBOARDING_PATH
        || path.starts_with("/onboarding/")
        || path == LOGIN_PATH
        || path.starts_with("/login/")
}
