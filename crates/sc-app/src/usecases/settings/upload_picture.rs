use std::sync::Arc;

use anyhow::Context;
use sc_core::ports::{
    AuthSessionPort, ObjectStoragePort, PictureResizerPort, ProfileRepositoryPort,
};

/// Use case for the profile picture upload path.
///
/// Resize to the bounding box, upload under the per-user prefix, then write
/// the resulting URL back onto the profile document.
pub struct UploadProfilePicture {
    session: Arc<dyn AuthSessionPort>,
    resizer: Arc<dyn PictureResizerPort>,
    storage: Arc<dyn ObjectStoragePort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
}

impl UploadProfilePicture {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        resizer: Arc<dyn PictureResizerPort>,
        storage: Arc<dyn ObjectStoragePort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
    ) -> Self {
        Self {
            session,
            resizer,
            storage,
            profiles,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        resizer: Arc<dyn PictureResizerPort>,
        storage: Arc<dyn ObjectStoragePort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
    ) -> Self {
        Self::new(session, resizer, storage, profiles)
    }

    pub async fn execute(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<String> {
        let session = self
            .session
            .current()
            .await?
            .context("no authenticated user")?;
        let uid = session.user.uid;

        let resized = self
            .resizer
            .resize(&bytes)
            .await
            .context("failed to resize profile picture")?;

        let path = format!("profile-pictures/{}/{}", uid, file_name);
        let url = self
            .storage
            .upload(&path, resized.bytes, &resized.content_type)
            .await
            .context("failed to upload profile picture")?;

        self.profiles
            .set_picture(&uid, &url)
            .await
            .context("failed to store profile picture URL")?;

        log::info!("profile picture updated for {}", uid);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{
        session_for, MockAuthSessionPort, MockObjectStorage, MockPictureResizer,
        MockProfileRepository,
    };
    use sc_core::account::UserProfile;

    #[tokio::test]
    async fn test_upload_resizes_stores_and_patches_profile() {
        let storage = Arc::new(MockObjectStorage::default());
        let profiles = Arc::new(MockProfileRepository::with_profile(
            "u1",
            UserProfile::default(),
        ));
        let uc = UploadProfilePicture::new(
            Arc::new(MockAuthSessionPort::with_session(session_for("u1"))),
            Arc::new(MockPictureResizer),
            storage.clone(),
            profiles.clone(),
        );

        let url = uc.execute("avatar.png", vec![0u8; 64]).await.unwrap();

        assert_eq!(url, "https://storage.example/profile-pictures/u1/avatar.png");

        // Resized bytes (not the originals) were uploaded.
        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads[0].0, "profile-pictures/u1/avatar.png");
        assert_eq!(uploads[0].1, 32);

        let patches = profiles.picture_patches.lock().unwrap();
        assert_eq!(patches[0], ("u1".to_string(), url));
    }

    #[tokio::test]
    async fn test_upload_requires_a_session() {
        let uc = UploadProfilePicture::new(
            Arc::new(MockAuthSessionPort::default()),
            Arc::new(MockPictureResizer),
            Arc::new(MockObjectStorage::default()),
            Arc::new(MockProfileRepository::default()),
        );
        assert!(uc.execute("avatar.png", vec![0u8; 8]).await.is_err());
    }
}
