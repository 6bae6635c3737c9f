//! Picture resizer port
//!
//! Profile pictures are resized client-side before upload so the stored
//! object is bounded regardless of what the user picks.

use async_trait::async_trait;

/// Resize output: re-encoded bytes plus the mime type they were encoded as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedPicture {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait PictureResizerPort: Send + Sync {
    /// Resize image bytes into the configured bounding box, preserving
    /// aspect ratio. Images already inside the box pass through unscaled.
    async fn resize(&self, image_bytes: &[u8]) -> anyhow::Result<ResizedPicture>;
}
