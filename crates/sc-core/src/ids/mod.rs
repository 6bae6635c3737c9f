//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

/// Identity-provider user id (Firebase `localId` / `uid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

/// Company document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(String);

id_macro::impl_id!(UserId, CompanyId);

impl CompanyId {
    /// Placeholder company every new profile is associated with until the
    /// user fills in company details.
    pub fn default_company() -> Self {
        Self("default-company".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn test_default_company_id_is_stable() {
        assert_eq!(CompanyId::default_company().as_ref(), "default-company");
    }

    #[test]
    fn test_display_roundtrip() {
        let id = UserId::from_str("abc123");
        assert_eq!(id.to_string(), "abc123");
    }
}
