//! Service layer providing the roast-record persistence core.
//! - `storage` holds the asynchronous key-value backend contract and its
//!   in-memory and file-backed implementations.
//! - `roast` holds the store that owns the serialized collection and its
//!   read-modify-write cycle.
//! - Entity definitions and caller-side helpers live in the `models` crate.

pub mod errors;
pub mod roast;
pub mod runtime;
pub mod storage;
