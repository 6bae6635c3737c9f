//! File-based onboarding state repository
//!
//! This module provides a file-based implementation of the
//! OnboardingStatePort, persisting the progress record to a local JSON file
//! in the application data directory. The completion flag is a separate
//! marker file so checking it never deserializes the record.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use sc_core::onboarding::OnboardingRecord;
use sc_core::ports::OnboardingStatePort;

pub const DEFAULT_ONBOARDING_RECORD_FILE: &str = "onboarding_data.json";
pub const DEFAULT_ONBOARDING_COMPLETE_FILE: &str = ".onboarding_complete";

pub struct FileOnboardingStateRepository {
    record_path: PathBuf,
    flag_path: PathBuf,
}

impl FileOnboardingStateRepository {
    /// Create repository with explicit file paths
    pub fn new(record_path: PathBuf, flag_path: PathBuf) -> Self {
        Self {
            record_path,
            flag_path,
        }
    }

    /// Create repository with defaults under a base directory
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            record_path: base_dir.join(DEFAULT_ONBOARDING_RECORD_FILE),
            flag_path: base_dir.join(DEFAULT_ONBOARDING_COMPLETE_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.record_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        if let Some(parent) = self.flag_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl OnboardingStatePort for FileOnboardingStateRepository {
    async fn get_record(&self) -> anyhow::Result<Option<OnboardingRecord>> {
        if !self.record_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.record_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let record: OnboardingRecord = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse onboarding record: {}", e))?;

        Ok(Some(record))
    }

    async fn set_record(&self, record: &OnboardingRecord) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| anyhow::anyhow!("Failed to serialize onboarding record: {}", e))?;

        let mut file = fs::File::create(&self.record_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create record file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write record file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync record file: {}", e))?;

        Ok(())
    }

    async fn is_completed(&self) -> anyhow::Result<bool> {
        Ok(self.flag_path.exists())
    }

    async fn set_completed(&self, completed: bool) -> anyhow::Result<()> {
        if completed {
            self.ensure_parent_dir().await?;
            fs::write(&self.flag_path, b"true").await?;
        } else if self.flag_path.exists() {
            fs::remove_file(&self.flag_path).await?;
        }
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        if self.record_path.exists() {
            fs::remove_file(&self.record_path).await?;
        }
        if self.flag_path.exists() {
            fs::remove_file(&self.flag_path).await?;
        }
        Ok(())
    }
}
