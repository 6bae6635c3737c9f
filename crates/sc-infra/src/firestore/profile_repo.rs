//! Profile repository over Firestore documents.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use sc_core::account::{AccountUpdate, UserProfile};
use sc_core::ids::UserId;
use sc_core::ports::{DocumentStoreError, ProfileRepositoryPort};

use super::client::FirestoreClient;

pub const USERS_COLLECTION: &str = "users";

pub struct FirestoreProfileRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreProfileRepository {
    pub fn new(client: Arc<FirestoreClient>) -> Self {
        Self { client }
    }
}

fn to_fields<T: serde::Serialize>(value: &T) -> Result<Map<String, Value>, DocumentStoreError> {
    match serde_json::to_value(value).map_err(|e| DocumentStoreError::Decode(e.to_string()))? {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentStoreError::Decode(
            "expected an object document".to_string(),
        )),
    }
}

#[async_trait]
impl ProfileRepositoryPort for FirestoreProfileRepository {
    async fn get(&self, uid: &UserId) -> Result<Option<UserProfile>, DocumentStoreError> {
        let Some(fields) = self.client.get_fields(USERS_COLLECTION, uid.as_ref()).await? else {
            return Ok(None);
        };

        let profile = serde_json::from_value(Value::Object(fields))
            .map_err(|e| DocumentStoreError::Decode(e.to_string()))?;
        Ok(Some(profile))
    }

    async fn create(
        &self,
        uid: &UserId,
        profile: &UserProfile,
    ) -> Result<(), DocumentStoreError> {
        let fields = to_fields(profile)?;
        self.client
            .set_document(USERS_COLLECTION, uid.as_ref(), &fields)
            .await
    }

    async fn update_account(
        &self,
        uid: &UserId,
        update: &AccountUpdate,
    ) -> Result<(), DocumentStoreError> {
        let fields = to_fields(update)?;
        // Patch exactly the form's fields; `picture` only when the form
        // actually carries one.
        let mut mask = vec!["full_name", "email", "phone_number", "job_title"];
        if update.picture.is_some() {
            mask.push("picture");
        }
        self.client
            .patch_document(USERS_COLLECTION, uid.as_ref(), &fields, &mask)
            .await
    }

    async fn set_picture(&self, uid: &UserId, url: &str) -> Result<(), DocumentStoreError> {
        let mut fields = Map::new();
        fields.insert("picture".to_string(), Value::String(url.to_string()));
        self.client
            .patch_document(USERS_COLLECTION, uid.as_ref(), &fields, &["picture"])
            .await
    }
}
