//! Onboarding state machine.
//!
//! Defines a pure state transition function for the onboarding wizard.
//! Validation runs before submissions reach this machine; the machine only
//! enforces ordering and the completion invariant, and produces side-effect
//! actions for the caller to execute.

use chrono::{DateTime, Utc};

use crate::onboarding::payloads::StepSubmission;
use crate::onboarding::record::OnboardingRecord;
use crate::onboarding::step::OnboardingStep;

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingEvent {
    /// Submit the current step's validated payload.
    Submit(StepSubmission),
    /// Navigate back one step.
    Back,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Set the durable completion flag and hand control to the dashboard.
    MarkComplete,
}

/// Pure onboarding state machine.
pub struct OnboardingFlow;

impl OnboardingFlow {
    pub fn transition(
        record: OnboardingRecord,
        event: OnboardingEvent,
        now: DateTime<Utc>,
    ) -> (OnboardingRecord, Vec<OnboardingAction>) {
        match event {
            OnboardingEvent::Submit(submission) => {
                let step = submission.step();

                // A submission only applies to the step currently shown;
                // anything else is a stale or forged event.
                if step.index() != record.current_step {
                    return (record, Vec::new());
                }

                // Completion invariant: the terms gate holds even if a
                // caller skips form validation.
                if let StepSubmission::Confirmation(confirmation) = &submission {
                    if !confirmation.terms_accepted {
                        return (record, Vec::new());
                    }
                }

                let mut record = record;
                record.steps.set(submission);
                if !record.completed_steps.contains(&step.index()) {
                    record.completed_steps.push(step.index());
                }
                record.last_updated = now;

                if step == OnboardingStep::FINAL {
                    // The pointer stays on the final step; the flag is what
                    // unlocks the dashboard.
                    (record, vec![OnboardingAction::MarkComplete])
                } else {
                    record.current_step += 1;
                    (record, Vec::new())
                }
            }
            OnboardingEvent::Back => {
                if record.current_step == 0 {
                    return (record, Vec::new());
                }
                let mut record = record;
                record.current_step -= 1;
                record.last_updated = now;
                (record, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::{Address, Company};
    use crate::onboarding::payloads::{Confirmation, Preferences, UserInformation};

    fn user_info() -> StepSubmission {
        StepSubmission::UserInfo(UserInformation {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            picture: None,
            phone_number: "0400111222".into(),
            job_title: "Founder".into(),
            department: "Sales".into(),
        })
    }

    fn preferences() -> StepSubmission {
        StepSubmission::Preferences(Preferences {
            role: "Admin".into(),
            department: "Sales".into(),
            interests: vec!["Web Development".into()],
        })
    }

    fn company_details() -> StepSubmission {
        StepSubmission::CompanyDetails(Company {
            company_name: "Acme Pty Ltd".into(),
            website: "https://acme.example".into(),
            industry: "Technology".into(),
            company_size: "11-50".into(),
            address: Address::from_legacy("1 Example St, Sydney"),
        })
    }

    fn confirmation(terms: bool) -> StepSubmission {
        StepSubmission::Confirmation(Confirmation {
            terms_accepted: terms,
            marketing_consent: false,
        })
    }

    fn submission_for(step: usize) -> StepSubmission {
        match step {
            0 => user_info(),
            1 => preferences(),
            2 => company_details(),
            _ => confirmation(true),
        }
    }

    #[test]
    fn test_submit_persists_payload_and_advances_pointer() {
        let now = Utc::now();
        let mut record = OnboardingRecord::new(now);

        for step in 0..3 {
            let (next, actions) = OnboardingFlow::transition(
                record,
                OnboardingEvent::Submit(submission_for(step)),
                now,
            );
            assert!(actions.is_empty());
            assert_eq!(next.current_step, step + 1);
            assert!(next.completed_steps.contains(&step));
            assert!(next.steps.has(OnboardingStep::from_index(step).unwrap()));
            record = next;
        }
    }

    #[test]
    fn test_final_step_marks_complete_without_advancing() {
        let now = Utc::now();
        let record = OnboardingRecord {
            current_step: 3,
            completed_steps: vec![0, 1, 2],
            ..OnboardingRecord::new(now)
        };

        let (next, actions) =
            OnboardingFlow::transition(record, OnboardingEvent::Submit(confirmation(true)), now);

        assert_eq!(actions, vec![OnboardingAction::MarkComplete]);
        assert_eq!(next.current_step, 3);
        assert!(next.completed_steps.contains(&3));
    }

    #[test]
    fn test_confirmation_without_terms_is_rejected() {
        let now = Utc::now();
        let record = OnboardingRecord {
            current_step: 3,
            completed_steps: vec![0, 1, 2],
            ..OnboardingRecord::new(now)
        };

        let (next, actions) =
            OnboardingFlow::transition(record, OnboardingEvent::Submit(confirmation(false)), now);

        assert!(actions.is_empty());
        assert!(!next.completed_steps.contains(&3));
        assert!(!next.steps.has(OnboardingStep::Confirmation));
    }

    #[test]
    fn test_out_of_order_submission_is_a_no_op() {
        let now = Utc::now();
        let record = OnboardingRecord::new(now);

        let (next, actions) =
            OnboardingFlow::transition(record.clone(), OnboardingEvent::Submit(preferences()), now);

        assert!(actions.is_empty());
        assert_eq!(next, record);
    }

    #[test]
    fn test_back_decrements_and_keeps_later_payloads() {
        let now = Utc::now();
        let mut record = OnboardingRecord::new(now);
        for step in 0..2 {
            record = OnboardingFlow::transition(
                record,
                OnboardingEvent::Submit(submission_for(step)),
                now,
            )
            .0;
        }
        assert_eq!(record.current_step, 2);

        let (next, actions) = OnboardingFlow::transition(record, OnboardingEvent::Back, now);
        assert!(actions.is_empty());
        assert_eq!(next.current_step, 1);
        // Step 1's payload survives going back to it.
        assert!(next.steps.has(OnboardingStep::Preferences));
        assert!(next.completed_steps.contains(&1));
    }

    #[test]
    fn test_back_at_step_zero_is_a_no_op() {
        let now = Utc::now();
        let record = OnboardingRecord::new(now);
        let (next, actions) = OnboardingFlow::transition(record.clone(), OnboardingEvent::Back, now);
        assert!(actions.is_empty());
        assert_eq!(next, record);
    }

    #[test]
    fn test_resubmitting_a_step_does_not_duplicate_completion() {
        let now = Utc::now();
        let record = OnboardingRecord::new(now);
        let (record, _) =
            OnboardingFlow::transition(record, OnboardingEvent::Submit(user_info()), now);
        let (record, _) = OnboardingFlow::transition(record, OnboardingEvent::Back, now);
        let (record, _) =
            OnboardingFlow::transition(record, OnboardingEvent::Submit(user_info()), now);

        assert_eq!(
            record.completed_steps.iter().filter(|&&s| s == 0).count(),
            1
        );
    }
}
