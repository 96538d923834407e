//! # Gearbook Core
//!
//! Pure primitives for gearbook: bookings of shared equipment on half-hour slots.
//!
//! This crate contains no I/O and no storage. It defines the record types, parses
//! raw form input into them, and answers the one question the rest of the system
//! depends on: do two bookings overlap?
//!
//! ## Key Types
//!
//! - [`Booking`] - A stored reservation of one equipment item
//! - [`BookingRequest`] - A candidate booking as submitted (raw strings)
//! - [`BookingId`] - Opaque unique identifier
//! - [`EquipmentId`] - The fixed equipment catalog
//! - [`SlotTime`] / [`SlotRange`] - Half-hour quantized minute-of-day values
//!
//! ## Overlap
//!
//! Intervals are half-open: `[start, end)`. Adjacent bookings (one ends at 10:00,
//! the next starts at 10:00) do not overlap. See [`SlotRange::overlaps`].

pub mod booking;
pub mod calendar;
pub mod equipment;
pub mod error;
pub mod slot;
pub mod types;
pub mod validation;

pub use booking::{Booking, BookingRequest};
pub use calendar::{date_options, format_date, today};
pub use equipment::EquipmentId;
pub use error::{Field, ValidationError};
pub use slot::{SlotRange, SlotTime, DAY_END, DAY_START, SLOT_MINUTES};
pub use types::BookingId;
pub use validation::{collect_issues, validate_booking, validate_request, ValidRequest};

pub use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
