//! # sc-infra
//!
//! Infrastructure adapters for SupaCRM: file-based local state, the hosted
//! backend's REST surfaces (identity, document store, object storage), and
//! in-process helpers (image resizing, clock, app data dirs).

pub mod auth;
pub mod firestore;
pub mod fs;
pub mod onboarding_state;
pub mod picture;
pub mod storage;
pub mod time;

pub use time::SystemClock;
