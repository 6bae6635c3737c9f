//! User profile domain models
//!
//! The profile document mirrors the identity-provider user and carries the
//! CRM-side fields (job, department, interests, company association). It is
//! lazily created on first access from identity defaults.

use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::ids::CompanyId;
use crate::validation::{require_email, require_min_chars, FieldError};

/// Profile document stored at `users/{uid}`.
///
/// Deserialization tolerates partial documents; some early profiles carry
/// only the identity fields and the company association.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
}

impl UserProfile {
    /// Initial profile for a user with no document yet: identity-provider
    /// defaults plus the placeholder company association.
    pub fn initial_for(user: &AuthUser) -> Self {
        Self {
            full_name: user.display_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            picture: user.photo_url.clone().unwrap_or_default(),
            company_id: Some(CompanyId::default_company()),
            ..Default::default()
        }
    }

    /// The company this profile belongs to, falling back to the placeholder
    /// for documents written before the association existed.
    pub fn company_id_or_default(&self) -> CompanyId {
        self.company_id
            .clone()
            .unwrap_or_else(CompanyId::default_company)
    }

    /// Apply the account-form fields, leaving everything else untouched.
    pub fn apply(&mut self, update: &AccountUpdate) {
        self.full_name = update.full_name.clone();
        self.email = update.email.clone();
        if let Some(picture) = &update.picture {
            self.picture = picture.clone();
        }
        self.phone_number = update.phone_number.clone();
        self.job_title = update.job_title.clone();
    }
}

/// The editable subset of the profile exposed by the account settings form.
///
/// Updates patch exactly these fields so `role`, `interests`, and the
/// company association survive a save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub phone_number: String,
    pub job_title: String,
}

impl AccountUpdate {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_min_chars(&mut errors, "full_name", &self.full_name, 2);
        require_email(&mut errors, "email", &self.email);
        require_min_chars(&mut errors, "phone_number", &self.phone_number, 1);
        require_min_chars(&mut errors, "job_title", &self.job_title, 1);
        errors
    }
}
