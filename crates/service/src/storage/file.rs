use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::errors::StoreError;
use crate::storage::StorageBackend;

/// File-backed key-value backend: one file per key under a data directory.
/// Intended for lightweight local persistence where a database is overkill.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open the backend rooted at `dir`, creating the directory if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(Self { dir })
    }

    // Keys may contain characters that are not portable file names (the
    // well-known key starts with `@`), so everything outside [A-Za-z0-9_-]
    // is mapped to `_`. Distinct keys used by this crate stay distinct.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}
