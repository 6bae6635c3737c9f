//! Company repository over Firestore documents.
//!
//! Reads tolerate the two legacy address shapes still present in older
//! documents (a plain string, or no address at all) and report the fix-up
//! to the caller through `CompanyFetch::address_normalized`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use sc_core::company::{Address, Company};
use sc_core::ids::CompanyId;
use sc_core::ports::{CompanyFetch, CompanyRepositoryPort, DocumentStoreError};

use super::client::FirestoreClient;

pub const COMPANIES_COLLECTION: &str = "companies";

pub struct FirestoreCompanyRepository {
    client: Arc<FirestoreClient>,
}

impl FirestoreCompanyRepository {
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

fn decode(mut fields: Map<String, Value>) -> Result<CompanyFetch, DocumentStoreError> {
    // Legacy shapes: address missing entirely, or a one-line string.
    let legacy_formatted = match fields.get("address") {
        None => Some(String::new()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => None,
    };

    if let Some(formatted) = legacy_formatted {
        fields.remove("address");
        let mut company: Company = serde_json::from_value(Value::Object(fields))
            .map_err(|e| DocumentStoreError::Decode(e.to_string()))?;
        company.address = Address::from_legacy(formatted);
        return Ok(CompanyFetch {
            company,
            address_normalized: true,
        });
    }

    let company: Company = serde_json::from_value(Value::Object(fields))
        .map_err(|e| DocumentStoreError::Decode(e.to_string()))?;
    Ok(CompanyFetch {
        company,
        address_normalized: false,
    })
}

#[async_trait]
impl CompanyRepositoryPort for FirestoreCompanyRepository {
    async fn get(&self, id: &CompanyId) -> Result<Option<CompanyFetch>, DocumentStoreError> {
        let Some(fields) = self
            .client
            .get_fields(COMPANIES_COLLECTION, id.as_ref())
            .await?
        else {
            return Ok(None);
        };
        Ok(Some(decode(fields)?))
    }

    async fn create(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError> {
        let fields = to_fields(company)?;
        self.client
            .set_document(COMPANIES_COLLECTION, id.as_ref(), &fields)
            .await
    }

    async fn update(&self, id: &CompanyId, company: &Company) -> Result<(), DocumentStoreError> {
        let fields = to_fields(company)?;
        self.client
            .patch_document(
                COMPANIES_COLLECTION,
                id.as_ref(),
                &fields,
                &[
                    "company_name",
                    "website",
                    "industry",
                    "company_size",
                    "address",
                ],
            )
            .await
    }

    async fn set_address(
        &self,
        id: &CompanyId,
        address: &Address,
    ) -> Result<(), DocumentStoreError> {
        let mut fields = Map::new();
        fields.insert(
            "address".to_string(),
            serde_json::to_value(address).map_err(|e| DocumentStoreError::Decode(e.to_string()))?,
        );
        self.client
            .patch_document(COMPANIES_COLLECTION, id.as_ref(), &fields, &["address"])
            .await
    }
}
