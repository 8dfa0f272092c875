//! # Storage Layer
//!
//! The plant collection is one serialized blob under a fixed key in a
//! key-value store. [`StorageBackend`] is that key-value collaborator;
//! [`PlantStore`] owns the in-memory collection and mirrors it to the backend
//! after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one `<key>.json` file per key
//!   inside the data directory, written atomically
//! - [`memory::MemBackend`]: in-memory storage for testing, with optional
//!   write-error simulation
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── plants.json     # JSON array of plant records
//! └── config.json     # SproutConfig
//! ```
//!
//! Loading never fails: a missing key yields an empty collection, and so
//! does a blob that cannot be read or parsed.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod plant_store;

pub use plant_store::PlantStore;

pub const DEFAULT_KEY: &str = "plants";

/// Raw key-value I/O. Backends take `&self`; the in-memory one uses interior
/// mutability since sprout is single-threaded.
pub trait StorageBackend {
    /// Read the value stored under `key`. `Ok(None)` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so a failed write leaves the previous value intact.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
