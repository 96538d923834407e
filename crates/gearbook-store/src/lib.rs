//! # Gearbook Store
//!
//! Persistence providers for gearbook. The booking store never talks to a
//! storage medium directly; it goes through the [`Persistence`] trait, a
//! key/value interface over JSON blobs.
//!
//! ## Key Types
//!
//! - [`Persistence`] - `get`/`set` over a JSON value per key
//! - [`MemoryPersistence`] - In-memory provider for tests
//! - [`FilePersistence`] - One JSON file per key in a directory
//! - [`SqlitePersistence`] - Key/value table in a SQLite database
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gearbook_store::{Persistence, SqlitePersistence};
//!
//! let storage = SqlitePersistence::open("bookings.db").unwrap();
//! let saved = storage.set("equipment-bookings", &serde_json::json!([]));
//! assert!(saved);
//! ```
//!
//! ## Design Notes
//!
//! - **Best effort**: trait methods never fail. A read error looks like a missing
//!   key and a write error returns `false`. Both are logged.
//! - **Fallible inherent API**: the file and SQLite providers also expose
//!   `load`/`save` returning [`Result`] for callers that want the error.
//! - **Wholesale values**: each `set` overwrites the previous value for the key.

pub mod error;
pub mod file;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::FilePersistence;
pub use memory::MemoryPersistence;
pub use sqlite::SqlitePersistence;
pub use traits::Persistence;
