//! Tauri command handlers
//!
//! Commands are thin: resolve a use case from the runtime, execute it, map
//! the error to a string for the webview. All behavior lives in sc-app.

pub mod auth;
pub mod error;
pub mod guard;
pub mod onboarding;
pub mod settings;

pub use error::map_err;

pub use auth::{get_auth_session, sign_in_with_google, sign_out};
pub use guard::resolve_route;
pub use onboarding::{
    get_onboarding_state, go_back_onboarding_step, reset_onboarding, submit_onboarding_step,
};
pub use settings::{
    get_account, get_company, update_account, update_company, upload_profile_picture,
};
