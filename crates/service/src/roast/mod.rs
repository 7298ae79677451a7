pub mod store;
pub mod summary;

pub use store::{RoastStore, ROASTS_STORAGE_KEY};
pub use summary::RoastSummary;
