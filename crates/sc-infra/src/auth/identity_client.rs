//! Google Identity Toolkit client
//!
//! Exchanges the provider credential handed over by the webview for a
//! backend session (`accounts:signInWithIdp`) and refreshes expired ID
//! tokens through the secure-token endpoint. Endpoints are overridable for
//! the emulator suite.

use chrono::{Duration, Utc};
use log::{debug, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use sc_core::auth::{AuthSession, AuthUser, ProviderCredential};
use sc_core::config::AppConfig;
use sc_core::ids::UserId;
use sc_core::ports::{IdentityError, IdentityProviderPort};

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_SECURE_TOKEN_ENDPOINT: &str = "https://securetoken.googleapis.com";

pub struct GoogleIdentityClient {
    http: reqwest::Client,
    identity_endpoint: String,
    secure_token_endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithIdpResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
}

impl GoogleIdentityClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            identity_endpoint: config
                .identity_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_IDENTITY_ENDPOINT.to_string()),
            secure_token_endpoint: config
                .secure_token_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_SECURE_TOKEN_ENDPOINT.to_string()),
            api_key: config.api_key.clone(),
        }
    }

    fn identity_url(&self, method: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.identity_endpoint, method, self.api_key
        )
    }

    /// Expiry with the provider's `expiresIn` seconds, defensive about the
    /// string-encoded number the API returns.
    fn expires_at(expires_in: &str) -> chrono::DateTime<Utc> {
        let seconds = expires_in.parse::<i64>().unwrap_or(3600);
        Utc::now() + Duration::seconds(seconds)
    }

    async fn lookup_user(&self, id_token: &str) -> Result<AuthUser, IdentityError> {
        let response = self
            .http
            .post(self.identity_url("lookup"))
            .json(&json!({ "idToken": id_token }))
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(IdentityError::UnexpectedStatus(response.status().as_u16()));
        }

        let lookup: LookupResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))?;
        let user = lookup
            .users
            .into_iter()
            .next()
            .ok_or_else(|| IdentityError::Decode("lookup returned no users".to_string()))?;

        Ok(AuthUser {
            uid: UserId::from_string(user.local_id),
            email: user.email.unwrap_or_default(),
            display_name: user.display_name,
            photo_url: user.photo_url,
        })
    }
}

/// Pull the human-readable message out of a Google error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")
                .map(|m| m.as_str().unwrap_or_default().to_string())
        })
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[async_trait::async_trait]
impl IdentityProviderPort for GoogleIdentityClient {
    async fn sign_in(&self, credential: &ProviderCredential) -> Result<AuthSession, IdentityError> {
        let body = json!({
            "postBody": format!("id_token={}&providerId=google.com", credential.id_token),
            "requestUri": "http://localhost",
            "returnIdpCredential": true,
            "returnSecureToken": true,
        });

        let response = self
            .http
            .post(self.identity_url("signInWithIdp"))
            .json(&body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let signed_in: SignInWithIdpResponse = response
                    .json()
                    .await
                    .map_err(|e| IdentityError::Decode(e.to_string()))?;
                debug!("signed in with provider, uid {}", signed_in.local_id);

                Ok(AuthSession {
                    user: AuthUser {
                        uid: UserId::from_string(signed_in.local_id),
                        email: signed_in.email.unwrap_or_default(),
                        display_name: signed_in.display_name,
                        photo_url: signed_in.photo_url,
                    },
                    expires_at: Self::expires_at(&signed_in.expires_in),
                    id_token: signed_in.id_token,
                    refresh_token: signed_in.refresh_token,
                })
            }
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                let message = error_message(&body);
                warn!("provider sign-in rejected: {}", message);
                Err(IdentityError::InvalidCredential(message))
            }
            status => Err(IdentityError::UnexpectedStatus(status.as_u16())),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, IdentityError> {
        let url = format!(
            "{}/v1/token?key={}",
            self.secure_token_endpoint, self.api_key
        );
        let response = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let refreshed: RefreshResponse = match response.status() {
            StatusCode::OK => response
                .json()
                .await
                .map_err(|e| IdentityError::Decode(e.to_string()))?,
            StatusCode::BAD_REQUEST => return Err(IdentityError::RefreshRejected),
            status => return Err(IdentityError::UnexpectedStatus(status.as_u16())),
        };

        // The secure-token endpoint only returns ids; the profile fields
        // come from a lookup with the fresh token.
        let user = self.lookup_user(&refreshed.id_token).await?;

        Ok(AuthSession {
            user,
            expires_at: Self::expires_at(&refreshed.expires_in),
            id_token: refreshed.id_token,
            refresh_token: refreshed.refresh_token,
        })
    }
}
