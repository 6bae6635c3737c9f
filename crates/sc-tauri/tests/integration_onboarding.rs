//! Integration tests for the onboarding flow
//!
//! Drives the use cases against the real file-based state repository, the
//! way the commands do at runtime.

use std::sync::Arc;

use sc_app::usecases::{
    GetOnboardingState, GoBackOnboardingStep, ResolveRoute, SubmitOnboardingStep,
    SubmitStepOutcome,
};
use sc_core::company::{Address, Company};
use sc_core::guard::{RouteDecision, DASHBOARD_PATH};
use sc_core::onboarding::payloads::{Confirmation, Preferences, UserInformation};
use sc_core::onboarding::{OnboardingStep, StepSubmission};
use sc_core::ports::{ClockPort, OnboardingStatePort};
use sc_infra::onboarding_state::FileOnboardingStateRepository;
use sc_infra::SystemClock;
use tempfile::tempdir;

fn submissions() -> [StepSubmission; 4] {
    [
        StepSubmission::UserInfo(UserInformation {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            picture: None,
            phone_number: "0400111222".into(),
            job_title: "Founder".into(),
            department: "Sales".into(),
        }),
        StepSubmission::Preferences(Preferences {
            role: "Admin".into(),
            department: "Sales".into(),
            interests: vec!["Web Development".into(), "DevOps".into()],
        }),
        StepSubmission::CompanyDetails(Company {
            company_name: "Acme Pty Ltd".into(),
            website: "https://acme.example".into(),
            industry: "Technology".into(),
            company_size: "11-50".into(),
            address: Address::from_legacy("1 Example St, Sydney"),
        }),
        StepSubmission::Confirmation(Confirmation {
            terms_accepted: true,
            marketing_consent: false,
        }),
    ]
}

fn wire(
    dir: &tempfile::TempDir,
) -> (
    Arc<dyn OnboardingStatePort>,
    Arc<dyn ClockPort>,
) {
    (
        Arc::new(FileOnboardingStateRepository::with_defaults(
            dir.path().to_path_buf(),
        )),
        Arc::new(SystemClock),
    )
}

#[tokio::test]
async fn test_full_wizard_run_persists_and_completes() {
    let dir = tempdir().unwrap();
    let (state, clock) = wire(&dir);

    let get_state = GetOnboardingState::new(state.clone(), clock.clone());
    let submit = SubmitOnboardingStep::new(state.clone(), clock.clone());

    // First visit initializes at step zero.
    let initial = get_state.execute().await.unwrap();
    assert_eq!(initial.record.current_step, 0);
    assert!(!initial.has_completed);

    for submission in submissions() {
        match submit.execute(submission).await.unwrap() {
            SubmitStepOutcome::Saved { .. } => {}
            SubmitStepOutcome::Invalid { errors } => {
                panic!("unexpected validation errors: {:?}", errors)
            }
        }
    }

    // Completion flag set, pointer parked on the final step, all payloads kept.
    let done = get_state.execute().await.unwrap();
    assert!(done.has_completed);
    assert_eq!(done.record.current_step, 3);
    for step in OnboardingStep::ALL {
        assert!(done.record.steps.has(step), "missing payload for {:?}", step);
    }
}

#[tokio::test]
async fn test_progress_survives_a_restart() {
    let dir = tempdir().unwrap();

    {
        let (state, clock) = wire(&dir);
        let submit = SubmitOnboardingStep::new(state, clock);
        let steps = submissions();
        submit.execute(steps[0].clone()).await.unwrap();
        submit.execute(steps[1].clone()).await.unwrap();
    }

    // A new repository over the same directory sees the same progress.
    let (state, clock) = wire(&dir);
    let resumed = GetOnboardingState::new(state, clock)
        .execute()
        .await
        .unwrap();

    assert_eq!(resumed.record.current(), OnboardingStep::CompanyDetails);
    assert_eq!(resumed.record.completed_steps, vec![0, 1]);
    assert!(resumed.record.steps.has(OnboardingStep::Preferences));
}

#[tokio::test]
async fn test_back_then_resubmit_keeps_later_data() {
    let dir = tempdir().unwrap();
    let (state, clock) = wire(&dir);
    let submit = SubmitOnboardingStep::new(state.clone(), clock.clone());
    let go_back = GoBackOnboardingStep::new(state.clone(), clock.clone());

    let steps = submissions();
    submit.execute(steps[0].clone()).await.unwrap();
    submit.execute(steps[1].clone()).await.unwrap();

    let dto = go_back.execute().await.unwrap();
    assert_eq!(dto.record.current_step, 1);
    assert!(dto.record.steps.has(OnboardingStep::Preferences));

    // Re-submitting the step moves forward again without duplicating the
    // completion entry.
    let dto = match submit.execute(steps[1].clone()).await.unwrap() {
        SubmitStepOutcome::Saved { state } => state,
        SubmitStepOutcome::Invalid { errors } => panic!("unexpected errors: {:?}", errors),
    };
    assert_eq!(dto.record.current_step, 2);
    assert_eq!(dto.record.completed_steps, vec![0, 1]);
}

#[tokio::test]
async fn test_guard_unlocks_dashboard_only_after_completion() {
    let dir = tempdir().unwrap();
    let (state, clock) = wire(&dir);

    // Signed-in session stub: the guard only checks presence.
    let session: Arc<dyn sc_core::ports::AuthSessionPort> =
        Arc::new(StubSession(std::sync::Mutex::new(Some(test_session()))));
    let guard = ResolveRoute::new(session, state.clone());

    assert_eq!(
        guard.execute(DASHBOARD_PATH).await.unwrap(),
        RouteDecision::RedirectToOnboarding
    );

    let submit = SubmitOnboardingStep::new(state, clock);
    for submission in submissions() {
        submit.execute(submission).await.unwrap();
    }

    assert_eq!(
        guard.execute(DASHBOARD_PATH).await.unwrap(),
        RouteDecision::Allow
    );
}

fn test_session() -> sc_core::auth::AuthSession {
    sc_core::auth::AuthSession {
        user: sc_core::auth::AuthUser {
            uid: sc_core::ids::UserId::from_str("u1"),
            email: "jane@example.com".into(),
            display_name: None,
            photo_url: None,
        },
        id_token: "id".into(),
        refresh_token: "refresh".into(),
        expires_at: chrono::Utc::now() + chrono::Duration::hours(1),
    }
}

struct StubSession(std::sync::Mutex<Option<sc_core::auth::AuthSession>>);

#[async_trait::async_trait]
impl sc_core::ports::AuthSessionPort for StubSession {
    async fn current(&self) -> anyhow::Result<Option<sc_core::auth::AuthSession>> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn store(&self, session: &sc_core::auth::AuthSession) -> anyhow::Result<()> {
        *self.0.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.0.lock().unwrap() = None;
        Ok(())
    }
}
