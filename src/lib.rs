//! SupaCRM desktop client.
//!
//! Assembles configuration, logging, the application runtime, and the Tauri
//! shell. Everything behavioral lives in the workspace crates; this crate
//! only wires and runs.

use std::sync::Arc;

use anyhow::Context;
use sc_core::config::AppConfig;
use sc_tauri::bootstrap::{build_deps, load_config, logging};
use sc_tauri::AppRuntime;

/// Load the backend configuration, falling back to defaults when the file
/// has not been written yet (first launch, or emulator-less dev setup).
fn resolve_config() -> anyhow::Result<AppConfig> {
    let config_path = sc_infra::fs::config_path()?;
    if config_path.exists() {
        load_config(config_path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn run() -> anyhow::Result<()> {
    // Note: the logging system initializes when the Builder registers the
    // plugin; anything before that only reaches stderr.
    let config = resolve_config()?;
    let state_dir = sc_infra::fs::state_dir()?;
    let deps = build_deps(&config, state_dir)?;
    let runtime = Arc::new(AppRuntime::new(deps));

    tauri::Builder::default()
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .manage(runtime)
        .invoke_handler(tauri::generate_handler![
            sc_tauri::commands::auth::sign_in_with_google,
            sc_tauri::commands::auth::sign_out,
            sc_tauri::commands::auth::get_auth_session,
            sc_tauri::commands::guard::resolve_route,
            sc_tauri::commands::onboarding::get_onboarding_state,
            sc_tauri::commands::onboarding::submit_onboarding_step,
            sc_tauri::commands::onboarding::go_back_onboarding_step,
            sc_tauri::commands::onboarding::reset_onboarding,
            sc_tauri::commands::settings::get_account,
            sc_tauri::commands::settings::update_account,
            sc_tauri::commands::settings::get_company,
            sc_tauri::commands::settings::update_company,
            sc_tauri::commands::settings::upload_profile_picture,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")
}
