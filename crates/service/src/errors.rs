use thiserror::Error;

/// Failures of the persistence core, one variant per phase of the
/// read-modify-write cycle.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend read failed: {0}")]
    Read(String),
    #[error("backend write failed: {0}")]
    Write(String),
    #[error("stored collection is not valid JSON: {0}")]
    Deserialize(String),
    #[error("could not serialize collection: {0}")]
    Serialize(String),
}
