//! Auth use cases
//!
//! Sign-in exchanges the provider credential handed over by the webview,
//! sign-out clears every piece of local client state, and session restore
//! keeps the desktop app signed in across launches.

pub mod get_session;
pub mod sign_in;
pub mod sign_out;

pub use get_session::GetAuthSession;
pub use sign_in::SignIn;
pub use sign_out::SignOut;

use sc_core::auth::AuthUser;

/// Result of a successful sign-in: the user plus where the shell should
/// navigate next (the preserved pre-login path wins).
#[derive(Debug, Clone, serde::Serialize)]
pub struct SignInDto {
    pub user: AuthUser,
    pub redirect_to: String,
}
