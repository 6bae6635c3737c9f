//! Per-step form validation.
//!
//! Mirrors what the webview forms enforce so a bypassed or buggy form can
//! never push bad data into the wizard.

use crate::onboarding::payloads::{
    Confirmation, Preferences, StepSubmission, UserInformation, INTEREST_OPTIONS,
};
use crate::validation::{
    require_email, require_min_chars, require_no_digits, require_true, FieldError,
};

impl UserInformation {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_min_chars(&mut errors, "full_name", &self.full_name, 2);
        require_no_digits(&mut errors, "full_name", &self.full_name);
        require_email(&mut errors, "email", &self.email);
        require_min_chars(&mut errors, "phone_number", &self.phone_number, 10);
        require_min_chars(&mut errors, "job_title", &self.job_title, 2);
        errors
    }
}

impl Preferences {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.interests.is_empty() {
            errors.push(FieldError::new(
                "interests",
                "Please select at least one interest",
            ));
        }
        for interest in &self.interests {
            if !INTEREST_OPTIONS.contains(&interest.as_str()) {
                errors.push(FieldError::new(
                    "interests",
                    format!("Unknown interest: {}", interest),
                ));
            }
        }
        errors
    }
}

impl Confirmation {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_true(
            &mut errors,
            "terms_accepted",
            self.terms_accepted,
            "You must accept the terms and conditions",
        );
        errors
    }
}

impl StepSubmission {
    /// Validate the payload against its step's rules.
    ///
    /// An empty vec means the submission may be handed to the state machine.
    pub fn validate(&self) -> Vec<FieldError> {
        match self {
            StepSubmission::UserInfo(data) => data.validate(),
            StepSubmission::Preferences(data) => data.validate(),
            StepSubmission::CompanyDetails(data) => data.validate(),
            StepSubmission::Confirmation(data) => data.validate(),
        }
    }
}
