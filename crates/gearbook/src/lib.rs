//! # Gearbook
//!
//! Booking store for shared equipment: a projector and a mobile screen,
//! reserved by name, date, and half-hour slot between 08:00 and 21:00.
//!
//! ## Overview
//!
//! [`BookingStore`] owns the booking list. It accepts a candidate booking,
//! checks it against every stored booking for the same equipment and date,
//! and either rejects it or appends it and writes the whole list back through
//! a [`Persistence`] provider.
//!
//! - **Overlap** is half-open: 09:00-10:00 and 10:00-11:00 can both be booked.
//! - **Conflicts** report the earliest-inserted overlapping booking.
//! - **Cancellation** is idempotent.
//! - **Persistence** is best effort: write failures are logged, never returned.
//!
//! ## Usage
//!
//! ```rust
//! use gearbook::{BookingError, BookingRequest, BookingStore};
//! use gearbook::store::MemoryPersistence;
//!
//! let mut store = BookingStore::new(MemoryPersistence::new());
//!
//! store
//!     .try_insert(&BookingRequest::new("Alice", "projector", "2025-06-01", "09:00", "10:00"))
//!     .unwrap();
//!
//! let err = store
//!     .try_insert(&BookingRequest::new("Bob", "projector", "2025-06-01", "09:30", "10:30"))
//!     .unwrap_err();
//! assert!(matches!(err, BookingError::Conflict { .. }));
//! ```
//!
//! ## Re-exports
//!
//! - `gearbook::core` - Booking types, validation, calendar helpers
//! - `gearbook::store` - Persistence trait and providers

pub mod bookings;
pub mod config;
pub mod error;

// Re-export component crates
pub use gearbook_core as core;
pub use gearbook_store as store;

// Re-export main types for convenience
pub use bookings::BookingStore;
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{BookingError, Result};

// Re-export commonly used core types
pub use gearbook_core::{
    Booking, BookingId, BookingRequest, EquipmentId, SlotRange, SlotTime, ValidationError,
};
pub use gearbook_store::Persistence;
