//! Firestore REST adapters
//!
//! The document store is reached through its REST documents API. `value`
//! maps between plain JSON and the wire's typed `Value` encoding, `client`
//! owns HTTP and error mapping, and the repositories map domain structs onto
//! documents.

pub mod client;
pub mod company_repo;
pub mod profile_repo;
pub mod value;

pub use client::FirestoreClient;
pub use company_repo::FirestoreCompanyRepository;
pub use profile_repo::FirestoreProfileRepository;
