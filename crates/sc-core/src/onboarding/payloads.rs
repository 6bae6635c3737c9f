//! Typed per-step form payloads.
//!
//! Each step submits one concrete shape; [`StepSubmission`] is the tagged
//! union over all four, selected by step, so no duck-typed payload ever
//! crosses a boundary.

use serde::{Deserialize, Serialize};

use crate::company::Company;
use crate::onboarding::step::OnboardingStep;

/// Interest options offered by the preferences step.
pub const INTEREST_OPTIONS: [&str; 7] = [
    "Web Development",
    "Mobile Development",
    "UI/UX Design",
    "Data Science",
    "DevOps",
    "Machine Learning",
    "Cloud Computing",
];

/// Step 0: who the user is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInformation {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub phone_number: String,
    pub job_title: String,
    #[serde(default)]
    pub department: String,
}

/// Step 1: how the user wants the product tuned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    pub interests: Vec<String>,
}

/// Step 3: terms gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub terms_accepted: bool,
    #[serde(default)]
    pub marketing_consent: bool,
}

/// Everything submitted so far, one optional slot per step.
///
/// Going back never clears a later slot; re-submitting a step overwrites
/// its slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepPayloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_details: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
}

impl StepPayloads {
    /// Store a submission under its step's slot.
    pub fn set(&mut self, submission: StepSubmission) {
        match submission {
            StepSubmission::UserInfo(data) => self.user_info = Some(data),
            StepSubmission::Preferences(data) => self.preferences = Some(data),
            StepSubmission::CompanyDetails(data) => self.company_details = Some(data),
            StepSubmission::Confirmation(data) => self.confirmation = Some(data),
        }
    }

    /// Whether the given step has a stored payload.
    pub fn has(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::UserInfo => self.user_info.is_some(),
            OnboardingStep::Preferences => self.preferences.is_some(),
            OnboardingStep::CompanyDetails => self.company_details.is_some(),
            OnboardingStep::Confirmation => self.confirmation.is_some(),
        }
    }
}

/// A validated form payload, tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", content = "data", rename_all = "snake_case")]
pub enum StepSubmission {
    UserInfo(UserInformation),
    Preferences(Preferences),
    CompanyDetails(Company),
    Confirmation(Confirmation),
}

impl StepSubmission {
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepSubmission::UserInfo(_) => OnboardingStep::UserInfo,
            StepSubmission::Preferences(_) => OnboardingStep::Preferences,
            StepSubmission::CompanyDetails(_) => OnboardingStep::CompanyDetails,
            StepSubmission::Confirmation(_) => OnboardingStep::Confirmation,
        }
    }
}
