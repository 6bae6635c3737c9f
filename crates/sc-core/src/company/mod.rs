//! Company domain models
//!
//! One company document per user, referenced from the profile by id. New
//! profiles point at a shared placeholder company until the user fills in
//! real details (onboarding step 2 or the company settings form).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{normalize_website, require_min_chars, FieldError};

/// Industry options offered by company forms.
pub const AVAILABLE_INDUSTRIES: [&str; 7] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Education",
    "Manufacturing",
    "Retail",
    "Other",
];

/// Company size brackets offered by company forms.
pub const AVAILABLE_COMPANY_SIZES: [&str; 6] =
    ["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

/// Structured postal address.
///
/// Older documents stored a plain string, and some stored the locality under
/// `suburb`; both shapes are accepted on read (see `alias`) and normalized
/// to this struct before anything else touches them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub formatted_address: String,
    #[serde(default)]
    pub street: String,
    #[serde(default, alias = "suburb")]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Address {
    /// Lift a legacy one-line address into the structured shape, keeping the
    /// original text as the formatted form and leaving the components empty.
    pub fn from_legacy(formatted: impl Into<String>) -> Self {
        Self {
            formatted_address: formatted.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_min_chars(
            &mut errors,
            "address.formatted_address",
            &self.formatted_address,
            1,
        );
        errors
    }
}

/// Company document.
///
/// Field values use empty strings rather than options, matching the document
/// shape the placeholder company is created with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub company_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub address: Address,
}

impl Company {
    /// Placeholder document created when a profile references a company that
    /// does not exist yet.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Validate the company form; on success the website field has been
    /// normalized in place (scheme prefixed).
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_min_chars(&mut errors, "company_name", &self.company_name, 2);
        normalize_website(&mut errors, "website", &self.website);
        require_min_chars(&mut errors, "industry", &self.industry, 1);
        require_min_chars(&mut errors, "company_size", &self.company_size, 1);
        errors.extend(self.address.validate());
        errors
    }

    /// Return a copy with the website normalized (used before persisting).
    pub fn normalized(mut self) -> Self {
        let mut scratch = Vec::new();
        if let Some(website) = normalize_website(&mut scratch, "website", &self.website) {
            self.website = website;
        }
        self
    }
}
