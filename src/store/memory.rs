//! In-memory storage backend, used by tests and dry runs

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::model::UserMap;
use super::StorageBackend;
use crate::core::PlannerResult;

#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<UserMap>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: UserMap) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read_all(&self) -> PlannerResult<UserMap> {
        Ok(self.data.lock().await.clone())
    }

    async fn write_all(&self, data: &UserMap) -> PlannerResult<()> {
        *self.data.lock().await = data.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
