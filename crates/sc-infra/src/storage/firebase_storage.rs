//! Firebase Storage REST client
//!
//! Uploads an object under the bucket and returns the token-bearing
//! download URL the profile document stores.

use std::sync::Arc;

use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;

use sc_core::config::AppConfig;
use sc_core::ports::{AuthSessionPort, ObjectStoragePort, ObjectStorageError};

pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://firebasestorage.googleapis.com";

pub struct FirebaseStorageClient {
    http: reqwest::Client,
    endpoint: String,
    bucket: String,
    session: Arc<dyn AuthSessionPort>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    name: String,
    #[serde(default)]
    download_tokens: Option<String>,
}

impl FirebaseStorageClient {
    pub fn new(config: &AppConfig, session: Arc<dyn AuthSessionPort>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config
                .storage_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_ENDPOINT.to_string()),
            bucket: config.storage_bucket.clone(),
            session,
        }
    }

    fn download_url(&self, object_name: &str, token: Option<&str>) -> String {
        let mut url = format!(
            "{}/v0/b/{}/o/{}?alt=media",
            self.endpoint,
            self.bucket,
            encode_object_name(object_name)
        );
        if let Some(token) = token {
            url.push_str("&token=");
            url.push_str(token);
        }
        url
    }
}

/// Percent-encode an object name for use as a URL path segment. The slash
/// separators are encoded too; download URLs address the whole object name
/// as one segment.
fn encode_object_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}

#[async_trait::async_trait]
impl ObjectStoragePort for FirebaseStorageClient {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ObjectStorageError> {
        let session = self
            .session
            .current()
            .await
            .map_err(|e| ObjectStorageError::Network(e.to_string()))?
            .ok_or(ObjectStorageError::Unauthenticated)?;

        let url = format!("{}/v0/b/{}/o", self.endpoint, self.bucket);
        let response = self
            .http
            .post(url)
            .query(&[("uploadType", "media"), ("name", path)])
            .header("Authorization", format!("Firebase {}", session.id_token))
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ObjectStorageError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let uploaded: UploadResponse = response
                    .json()
                    .await
                    .map_err(|e| ObjectStorageError::Decode(e.to_string()))?;
                debug!("uploaded object {}", uploaded.name);
                Ok(self.download_url(&uploaded.name, uploaded.download_tokens.as_deref()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                ObjectStorageError::PermissionDenied(response.status().to_string()),
            ),
            status => Err(ObjectStorageError::UnexpectedStatus(status.as_u16())),
        }
    }
}
