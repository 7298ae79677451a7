use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::storage::StorageBackend;

/// In-process key-value backend. Default for tests and for running without a
/// data directory.
#[derive(Default)]
pub struct MemoryBackend {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_absent_key_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("missing").await.expect("get"), None);
    }

    #[tokio::test]
    async fn set_overwrites_completely() {
        let backend = MemoryBackend::new();
        backend.set("k", "one".into()).await.expect("set");
        backend.set("k", "two".into()).await.expect("set");
        assert_eq!(backend.get("k").await.expect("get").as_deref(), Some("two"));
    }
}
