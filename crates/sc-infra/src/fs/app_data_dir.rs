use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the SupaCRM application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/SupaCRM
/// - Windows: %APPDATA%\SupaCRM
/// - Linux: $XDG_DATA_HOME/SupaCRM or ~/.local/share/SupaCRM
///
/// # Behavior
/// - This function does not automatically create directories.
/// - The caller decides when to create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("SupaCRM"))
}

/// Directory for the durable client-side state (onboarding record and flag,
/// auth session).
pub fn state_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("state"))
}

/// Location of the backend configuration file.
pub fn config_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("config.toml"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // Prefer XDG_DATA_HOME, fall back to ~/.local/share.
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            Ok(PathBuf::from(xdg_data_home))
        } else {
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get Linux data directory"))
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
    }
}
