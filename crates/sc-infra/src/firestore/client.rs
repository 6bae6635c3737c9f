//! Firestore REST client
//!
//! Owns HTTP, auth headers, and status-to-error mapping for the documents
//! API. Every call reads the current ID token from the session store, the
//! same way the browser SDK rode on `auth.currentUser`.

use std::sync::Arc;

use log::debug;
use reqwest::StatusCode;
use serde_json::{Map, Value};

use sc_core::config::AppConfig;
use sc_core::ports::{AuthSessionPort, DocumentStoreError};

use super::value::{decode_fields, encode_fields};

pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com";

pub struct FirestoreClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    session: Arc<dyn AuthSessionPort>,
}

impl FirestoreClient {
    pub fn new(config: &AppConfig, session: Arc<dyn AuthSessionPort>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config
                .firestore_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_FIRESTORE_ENDPOINT.to_string()),
            project_id: config.project_id.clone(),
            session,
        }
    }

    fn document_url(&self, collection: &str, doc_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.endpoint, self.project_id, collection, doc_id
        )
    }

    async fn bearer_token(&self) -> Result<String, DocumentStoreError> {
        let session = self
            .session
            .current()
            .await
            .map_err(|e| DocumentStoreError::Session(e.to_string()))?
            .ok_or(DocumentStoreError::Unauthenticated)?;
        Ok(session.id_token)
    }

    /// Fetch a document's fields as plain JSON, `None` on not-found.
    pub async fn get_fields(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> Result<Option<Map<String, Value>>, DocumentStoreError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .get(self.document_url(collection, doc_id))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| DocumentStoreError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let document: Value = response
                    .json()
                    .await
                    .map_err(|e| DocumentStoreError::Decode(e.to_string()))?;
                Ok(Some(decode_fields(document.get("fields"))))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(map_error_status(status)),
        }
    }

    /// Write a whole document (created when missing, replaced when present).
    pub async fn set_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), DocumentStoreError> {
        debug!("set {}/{}", collection, doc_id);
        self.patch(collection, doc_id, fields, None).await
    }

    /// Patch only the named top-level fields, leaving the rest of the
    /// document untouched. Fails with `NotFound` when the document does not
    /// exist.
    pub async fn patch_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: &Map<String, Value>,
        mask: &[&str],
    ) -> Result<(), DocumentStoreError> {
        debug!("patch {}/{} mask={:?}", collection, doc_id, mask);
        self.patch(collection, doc_id, fields, Some(mask)).await
    }

    async fn patch(
        &self,
        collection: &str,
        doc_id: &str,
        fields: &Map<String, Value>,
        mask: Option<&[&str]>,
    ) -> Result<(), DocumentStoreError> {
        let token = self.bearer_token().await?;

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(mask) = mask {
            for &field in mask {
                query.push(("updateMask.fieldPaths", field));
            }
            query.push(("currentDocument.exists", "true"));
        }

        let body = serde_json::json!({ "fields": encode_fields(fields) });
        let response = self
            .http
            .patch(self.document_url(collection, doc_id))
            .bearer_auth(&token)
            .query(&query)
            .json(&body)
            .send()
            .await
            .map_err(|e| DocumentStoreError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(DocumentStoreError::NotFound),
            status => Err(map_error_status(status)),
        }
    }
}

fn map_error_status(status: StatusCode) -> DocumentStoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DocumentStoreError::PermissionDenied(status.to_string())
        }
        other => DocumentStoreError::UnexpectedStatus(other.as_u16()),
    }
}
