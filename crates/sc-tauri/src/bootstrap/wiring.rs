//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (file stores, REST clients)
//! - Inject all dependencies into `AppDeps`
//!
//! ## Prohibited
//!
//! - No business logic: nothing here decides what to do when a session is
//!   missing or a document does not exist.
//! - No configuration validation: config was loaded in `config.rs`;
//!   validation belongs to a use case or the caller.
//!
//! > This is the only place allowed to depend on sc-infra and sc-app
//! > simultaneously, and the privilege is for assembly only.

use std::path::PathBuf;
use std::sync::Arc;

use sc_app::AppDeps;
use sc_core::config::AppConfig;
use sc_core::ports::AuthSessionPort;
use sc_infra::auth::{FileSessionStore, GoogleIdentityClient};
use sc_infra::firestore::{
    FirestoreClient, FirestoreCompanyRepository, FirestoreProfileRepository,
};
use sc_infra::onboarding_state::FileOnboardingStateRepository;
use sc_infra::picture::BoundingBoxPictureResizer;
use sc_infra::storage::FirebaseStorageClient;
use sc_infra::SystemClock;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("State directory initialization failed: {0}")]
    StateDirInit(String),
}

/// Assemble `AppDeps` from configuration and the local state directory.
pub fn build_deps(config: &AppConfig, state_dir: PathBuf) -> WiringResult<AppDeps> {
    std::fs::create_dir_all(&state_dir).map_err(|e| {
        WiringError::StateDirInit(format!(
            "Failed to create state directory {}: {}",
            state_dir.display(),
            e
        ))
    })?;

    let session = Arc::new(FileSessionStore::with_defaults(state_dir.clone()));
    let session_port: Arc<dyn AuthSessionPort> = session.clone();

    let firestore = Arc::new(FirestoreClient::new(config, session_port.clone()));

    Ok(AppDeps {
        identity: Arc::new(GoogleIdentityClient::new(config)),
        session: session_port.clone(),
        onboarding_state: Arc::new(FileOnboardingStateRepository::with_defaults(state_dir)),
        profiles: Arc::new(FirestoreProfileRepository::new(firestore.clone())),
        companies: Arc::new(FirestoreCompanyRepository::new(firestore)),
        object_storage: Arc::new(FirebaseStorageClient::new(config, session_port)),
        picture_resizer: Arc::new(BoundingBoxPictureResizer::default()),
        clock: Arc::new(SystemClock),
    })
}
