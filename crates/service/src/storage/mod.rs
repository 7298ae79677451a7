pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::errors::StoreError;
use async_trait::async_trait;

/// Asynchronous key-value backend the store persists through.
/// Implementations can be in-memory, file-backed, or remote KV; individual
/// `get`/`set` calls are atomic, but nothing spans a read and a later write.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetch the value at `key`, or `None` if the key was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Overwrite the value at `key` completely.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}
