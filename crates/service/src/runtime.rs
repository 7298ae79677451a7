//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so callers of the service crate do not
//! need to depend directly on `common`.

/// Ensure the configured data directory exists before opening a file-backed
/// store.
pub async fn ensure_env(data_dir: &str) -> anyhow::Result<()> {
    common::env::ensure_env(data_dir).await
}
