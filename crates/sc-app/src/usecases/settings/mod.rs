//! Settings use cases
//!
//! Account and company forms: fetch-if-missing reads, partial-update saves,
//! and the profile picture upload path.

pub mod get_account;
pub mod get_company;
pub mod update_account;
pub mod update_company;
pub mod upload_picture;

pub use get_account::GetAccount;
pub use get_company::GetCompany;
pub use update_account::UpdateAccount;
pub use update_company::UpdateCompany;
pub use upload_picture::UploadProfilePicture;

use sc_core::company::Company;
use sc_core::ids::CompanyId;

/// Company details plus the id they were resolved through, so a save can
/// address the same document.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompanyDto {
    pub company_id: CompanyId,
    pub company: Company,
}
