//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the AppConfig DTO
//! - Report I/O and parsing errors with context
//!
//! ## Iron Rule
//!
//! > **Pure data loading only. Accept whatever is in the file.**
//!
//! No validation, no invented defaults, no business rules. An empty project
//! id is a fact; whoever needs a non-empty one complains later.

use anyhow::Context;
use std::path::PathBuf;
use sc_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [project]
            id = "supacrm-prod"
            api_key = "AIzaFake"
            storage_bucket = "supacrm-prod.appspot.com"

            [endpoints]
            identity = "http://localhost:9099"
            firestore = "http://localhost:8080"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.project_id, "supacrm-prod");
        assert_eq!(config.api_key, "AIzaFake");
        assert_eq!(config.storage_bucket, "supacrm-prod.appspot.com");
        assert_eq!(
            config.identity_endpoint.as_deref(),
            Some("http://localhost:9099")
        );
        assert_eq!(config.storage_endpoint, None);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let toml_content = r#"
            [project]
            # id is missing
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        // Empty values are valid "facts".
        assert_eq!(config.project_id, "");
        assert_eq!(config.api_key, "");
        assert_eq!(config.firestore_endpoint, None);
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let result = load_config(PathBuf::from("/this/path/does/not/exist/config.toml"));

        assert!(result.is_err());
        let message = result.unwrap_err().to_string().to_lowercase();
        assert!(
            message.contains("failed to read"),
            "Expected IO error message, got: {}",
            message
        );
    }
}
