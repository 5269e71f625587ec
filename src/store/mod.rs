//! # Persistent Store
//!
//! Whole-map persistence of per-user records behind a pluggable backend.
//!
//! - **Version**: 1.1.1
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.1: Reads take the write lock too (first read may create the file)
//! - 1.1.0: Serialize load-mutate-save behind one write lock (`modify`)
//! - 1.0.0: Initial get_or_create / update contract over a JSON file

pub mod json_file;
pub mod memory;
pub mod model;

use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::PlannerResult;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use model::{ClassEntry, ExamEntry, HomeworkEntry, ReminderEntry, UserMap, UserRecord};

/// Raw whole-map storage
///
/// Backends only read and write the full mapping. Locking and per-user logic
/// live in [`UserStore`].
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read every record. A missing store yields an empty map.
    async fn read_all(&self) -> PlannerResult<UserMap>;

    /// Replace the stored mapping with `data`
    async fn write_all(&self, data: &UserMap) -> PlannerResult<()>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Per-user access to the stored mapping
///
/// Every backend call goes through one async mutex, so two commands touching
/// records at the same time cannot overwrite each other's changes within this
/// process.
#[derive(Clone)]
pub struct UserStore {
    backend: Arc<dyn StorageBackend>,
    write_lock: Arc<Mutex<()>>,
}

impl UserStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Store backed by an indented JSON file at `path`
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileBackend::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Read the whole mapping
    ///
    /// Holds the write lock because a backend may create a missing store on
    /// first read.
    pub async fn load(&self) -> PlannerResult<UserMap> {
        let _guard = self.write_lock.lock().await;
        self.backend.read_all().await
    }

    pub async fn save(&self, data: &UserMap) -> PlannerResult<()> {
        let _guard = self.write_lock.lock().await;
        self.backend.write_all(data).await
    }

    /// Existing record for `user_id`, or a fresh empty one (not persisted)
    pub async fn get_or_create(&self, user_id: &str) -> PlannerResult<UserRecord> {
        let data = self.load().await?;
        Ok(data.get(user_id).cloned().unwrap_or_default())
    }

    /// Reload the whole mapping, replace one record, and write it back
    pub async fn update(&self, user_id: &str, record: UserRecord) -> PlannerResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.backend.read_all().await?;
        data.insert(user_id.to_string(), record);
        self.backend.write_all(&data).await
    }

    /// Apply `f` to the user's record and persist the result atomically
    ///
    /// The record is created if absent. Returns whatever `f` returns.
    pub async fn modify<F, T>(&self, user_id: &str, f: F) -> PlannerResult<T>
    where
        F: FnOnce(&mut UserRecord) -> T + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut data = self.backend.read_all().await?;
        let record = data.entry(user_id.to_string()).or_default();
        let result = f(record);
        self.backend.write_all(&data).await?;
        debug!("Persisted record for user {user_id}");
        Ok(result)
    }

    /// Empty all four sequences for `user_id`, keeping the key in the store
    pub async fn reset(&self, user_id: &str) -> PlannerResult<()> {
        self.modify(user_id, UserRecord::clear).await
    }
}
