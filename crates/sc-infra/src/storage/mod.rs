//! Object storage adapters.

pub mod firebase_storage;

pub use firebase_storage::FirebaseStorageClient;
