//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Hosted-backend configuration for the desktop client.
///
/// Endpoint overrides exist for the emulator suite; `None` means the
/// production endpoint. `from_toml` performs pure data loading: whatever is
/// in the file is accepted as a fact, validation belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend project id.
    pub project_id: String,

    /// Browser API key used by the identity endpoints.
    pub api_key: String,

    /// Object storage bucket, e.g. `myproject.appspot.com`.
    pub storage_bucket: String,

    /// Identity Toolkit endpoint override (emulator).
    pub identity_endpoint: Option<String>,

    /// Secure-token endpoint override (emulator).
    pub secure_token_endpoint: Option<String>,

    /// Firestore endpoint override (emulator).
    pub firestore_endpoint: Option<String>,

    /// Object storage endpoint override (emulator).
    pub storage_endpoint: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: String::new(),
            storage_bucket: String::new(),
            identity_endpoint: None,
            secure_token_endpoint: None,
            firestore_endpoint: None,
            storage_endpoint: None,
        }
    }
}

impl AppConfig {
    /// Map a parsed TOML document onto the config DTO.
    ///
    /// Missing sections or keys become empty values; no defaults are
    /// invented and nothing is validated here.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        let project = value.get("project");
        let endpoints = value.get("endpoints");

        let str_key = |table: Option<&toml::Value>, key: &str| -> String {
            table
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        let opt_key = |table: Option<&toml::Value>, key: &str| -> Option<String> {
            table
                .and_then(|t| t.get(key))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };

        Ok(Self {
            project_id: str_key(project, "id"),
            api_key: str_key(project, "api_key"),
            storage_bucket: str_key(project, "storage_bucket"),
            identity_endpoint: opt_key(endpoints, "identity"),
            secure_token_endpoint: opt_key(endpoints, "secure_token"),
            firestore_endpoint: opt_key(endpoints, "firestore"),
            storage_endpoint: opt_key(endpoints, "storage"),
        })
    }
}
