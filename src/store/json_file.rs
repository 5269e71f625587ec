//! JSON flat-file storage backend
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Write through a temporary sibling file and rename
//! - 1.0.0: Initial whole-file read/write

use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

use super::model::UserMap;
use super::StorageBackend;
use crate::core::{PlannerError, PlannerResult};

/// Stores every user in one indented JSON object on disk
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    async fn ensure_parent(&self) -> PlannerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn read_all(&self) -> PlannerResult<UserMap> {
        if !tokio::fs::try_exists(&self.path).await? {
            info!("Data file {} not found, creating it", self.path.display());
            self.write_all(&UserMap::new()).await?;
            return Ok(UserMap::new());
        }

        let contents = tokio::fs::read_to_string(&self.path).await?;
        if contents.trim().is_empty() {
            return Ok(UserMap::new());
        }

        let data: UserMap = serde_json::from_str(&contents).map_err(|e| {
            PlannerError::StoreCorrupt(format!("{}: {e}", self.path.display()))
        })?;
        debug!("Loaded {} user records from {}", data.len(), self.path.display());
        Ok(data)
    }

    async fn write_all(&self, data: &UserMap) -> PlannerResult<()> {
        self.ensure_parent().await?;

        let json = serde_json::to_string_pretty(data)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        debug!("Wrote {} user records to {}", data.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
