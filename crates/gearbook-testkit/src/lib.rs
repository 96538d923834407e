//! # Gearbook Testkit
//!
//! Testing utilities for gearbook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a booking store over in-memory persistence with a fixed clock
//! - **Generators**: proptest strategies for candidate bookings
//!
//! ## Test Fixtures
//!
//! ```rust
//! use gearbook_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! let booking = fixture.book("Alice", "projector", "2025-06-01", "09:00", "10:00").unwrap();
//! assert_eq!(fixture.store.len(), 1);
//! assert_eq!(booking.user_name, "Alice");
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gearbook_testkit::generators::RequestParams;
//!
//! proptest! {
//!     #[test]
//!     fn never_overlaps(batch in prop::collection::vec(any::<RequestParams>(), 0..40)) {
//!         // insert every request, then check the store invariant
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{assert_no_overlaps, TestFixture, FIXED_NOW};
pub use generators::{request_from_params, RequestParams};
