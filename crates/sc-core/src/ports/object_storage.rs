//! Object storage port

use async_trait::async_trait;

use crate::ports::errors::ObjectStorageError;

#[async_trait]
pub trait ObjectStoragePort: Send + Sync {
    /// Upload an object and return its retrievable URL.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ObjectStorageError>;
}
