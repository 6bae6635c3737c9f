//! Shared mock ports for use-case tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sc_core::account::{AccountUpdate, UserProfile};
use sc_core::auth::{AuthSession, AuthUser, ProviderCredential};
use sc_core::company::{Address, Company};
use sc_core::ids::{CompanyId, UserId};
use sc_core::onboarding::OnboardingRecord;
use sc_core::ports::*;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

pub fn auth_user(uid: &str) -> AuthUser {
    AuthUser {
        uid: UserId::from_str(uid),
        email: format!("{}@example.com", uid),
        display_name: Some("Jane Doe".into()),
        photo_url: Some("https://example.com/jane.png".into()),
    }
}

pub fn session_for(uid: &str) -> AuthSession {
    AuthSession {
        user: auth_user(uid),
        id_token: "id-token".into(),
        refresh_token: "refresh-token".into(),
        expires_at: fixed_now() + chrono::Duration::hours(1),
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct MockOnboardingStatePort {
    pub record: Mutex<Option<OnboardingRecord>>,
    pub completed: Mutex<bool>,
}

#[async_trait]
impl OnboardingStatePort for MockOnboardingStatePort {
    async fn get_record(&self) -> anyhow::Result<Option<OnboardingRecord>> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn set_record(&self, record: &OnboardingRecord) -> anyhow::Result<()> {
        *self.record.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    async fn is_completed(&self) -> anyhow::Result<bool> {
        Ok(*self.completed.lock().unwrap())
    }

    async fn set_completed(&self, completed: bool) -> anyhow::Result<()> {
        *self.completed.lock().unwrap() = completed;
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        *self.record.lock().unwrap() = None;
        *self.completed.lock().unwrap() = false;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockAuthSessionPort {
    pub session: Mutex<Option<AuthSession>>,
}

impl MockAuthSessionPort {
    pub fn with_session(session: AuthSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl AuthSessionPort for MockAuthSessionPort {
    async fn current(&self) -> anyhow::Result<Option<AuthSession>> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn store(&self, session: &AuthSession) -> anyhow::Result<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

/// Identity provider returning canned sessions.
pub struct MockIdentityPort {
    pub sign_in_result: Mutex<Option<Result<AuthSession, IdentityError>>>,
    pub refresh_result: Mutex<Option<Result<AuthSession, IdentityError>>>,
}

impl MockIdentityPort {
    pub fn signing_in(session: AuthSession) -> Self {
        Self {
            sign_in_result: Mutex::new(Some(Ok(session))),
            refresh_result: Mutex::new(None),
        }
    }

    pub fn refreshing(result: Result<AuthSession, IdentityError>) -> Self {
        Self {
            sign_in_result: Mutex::new(None),
            refresh_result: Mutex::new(Some(result)),
        }
    }
}

#[async_trait]
impl IdentityProviderPort for MockIdentityPort {
    async fn sign_in(
        &self,
        _credential: &ProviderCredential,
    ) -> Result<AuthSession, IdentityError> {
        self.sign_in_result
            .lock()
            .unwrap()
            .take()
            .expect("sign_in result not configured")
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<AuthSession, IdentityError> {
        self.refresh_result
            .lock()
            .unwrap()
            .take()
            .expect("refresh result not configured")
    }
}

#[derive(Default)]
pub struct MockProfileRepository {
    pub docs: Mutex<HashMap<String, UserProfile>>,
    pub created: Mutex<Vec<String>>,
    pub account_patches: Mutex<Vec<(String, AccountUpdate)>>,
    pub picture_patches: Mutex<Vec<(String, String)>>,
}

impl MockProfileRepository {
    pub fn with_profile(uid: &str, profile: UserProfile) -> Self {
        let repo = Self::default();
        repo.docs.lock().unwrap().insert(uid.to_string(), profile);
        repo
    }
}

#[async_trait]
impl ProfileRepositoryPort for MockProfileRepository {
    async fn get(&self, uid: &UserId) -> Result<Option<UserProfile>, DocumentStoreError> {
        Ok(self.docs.lock().unwrap().get(uid.as_ref()).cloned())
    }

    async fn create(
        &self,
        uid: &UserId,
        profile: &UserProfile,
    ) -> Result<(), DocumentStoreError> {
        self.created.lock().unwrap().push(uid.to_string());
        self.docs
            .lock()
            .unwrap()
            .insert(uid.to_string(), profile.clone());
        Ok(())
    }

    async fn update_account(
        &self,
        uid: &UserId,
        update: &AccountUpdate,
    ) -> Result<(), DocumentStoreError> {
        let mut docs = self.docs.lock().unwrap();
        let profile = docs
            .get_mut(uid.as_ref())
            .ok_or(DocumentStoreError::NotFound)?;
        profile.apply(update);
        self.account_patches
            .lock()
            .unwrap()
            .push((uid.to_string(), update.clone()));
        Ok(())
    }

    async fn set_picture(&self, uid: &UserId, url: &str) -> Result<(), DocumentStoreError> {
        let mut docs = self.docs.lock().unwrap();
        if let Some(profile) = docs.get_mut(uid.as_ref()) {
            profile.picture = url.to_string();
        }
        self.picture_patches
            .lock()
            .unwrap()
            .push((uid.to_string(), url.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockCompanyRepository {
    pub docs: Mutex<HashMap<String, Company>>,
    /// Companies whose stored address is the legacy one-line string shape.
    pub legacy_addresses: Mutex<HashMap<String, String>>,
    pub created: Mutex<Vec<String>>,
    pub address_patches: Mutex<Vec<(String, Address)>>,
    pub updates: Mutex<Vec<(String, Company)>>,
}

#[async_trait]
impl CompanyRepositoryPort for MockCompanyRepository {
    async fn get(&self, id: &CompanyId) -> Result<Option<CompanyFetch>, DocumentStoreError> {
        if let Some(formatted) = self.legacy_addresses.lock().unwrap().get(id.as_ref()) {
            let mut company = self
                .docs
                .lock()
                .unwrap()
                .get(id.as_ref())
                .cloned()
                .unwrap_or_default();
            company.address = Address::from_legacy(formatted.clone());
            return Ok(Some(CompanyFetch {
                company,
                address_normalized: true,
            }));
        }
        Ok(self
            .docs
            .lock()
            .unwrap()
            .get(id.as_ref())
            .cloned()
            .map(|company| CompanyFetch {
                company,
                address_normalized: false,
            }))
    }

    async fn create(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError> {
        self.created.lock().unwrap().push(id.to_string());
        self.docs
            .lock()
            .unwrap()
            .insert(id.to_string(), company.clone());
        Ok(())
    }

    async fn update(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError> {
        self.docs
            .lock()
            .unwrap()
            .insert(id.to_string(), company.clone());
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), company.clone()));
        Ok(())
    }

    async fn set_address(
        &self,
        id: &CompanyId,
        address: &Address,
    ) -> Result<(), DocumentStoreError> {
        self.legacy_addresses.lock().unwrap().remove(id.as_ref());
        if let Some(company) = self.docs.lock().unwrap().get_mut(id.as_ref()) {
            company.address = address.clone();
        }
        self.address_patches
            .lock()
            .unwrap()
            .push((id.to_string(), address.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockObjectStorage {
    pub uploads: Mutex<Vec<(String, usize, String)>>,
}

#[async_trait]
impl ObjectStoragePort for MockObjectStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ObjectStorageError> {
        self.uploads
            .lock()
            .unwrap()
            .push((path.to_string(), bytes.len(), content_type.to_string()));
        Ok(format!("https://storage.example/{}", path))
    }
}

/// Resizer that halves the byte count and reports PNG output.
#[derive(Default)]
pub struct MockPictureResizer;

#[async_trait]
impl PictureResizerPort for MockPictureResizer {
    async fn resize(&self, image_bytes: &[u8]) -> anyhow::Result<ResizedPicture> {
        Ok(ResizedPicture {
            bytes: image_bytes[..image_bytes.len() / 2].to_vec(),
            content_type: "image/png".to_string(),
        })
    }
}
