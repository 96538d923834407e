//! Error types for the booking store.

use gearbook_core::{Booking, ValidationError};
use thiserror::Error;

/// Why a booking was refused.
///
/// Both variants are user-facing: their `Display` text is meant to be shown
/// inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The requested slot overlaps an existing booking on the same equipment
    /// and date. Carries the first such booking in insertion order.
    #[error("time conflict: {}", conflict_summary(.existing))]
    Conflict { existing: Booking },
}

impl BookingError {
    /// The booking that blocked the insert, if this is a conflict.
    pub fn conflicting_booking(&self) -> Option<&Booking> {
        match self {
            BookingError::Conflict { existing } => Some(existing),
            BookingError::Validation(_) => None,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, BookingError::Conflict { .. })
    }
}

fn conflict_summary(existing: &Booking) -> String {
    format!(
        "{} is already booked {} by {}",
        existing.equipment_id.name(),
        existing.range(),
        existing.user_name
    )
}

/// Result type for booking store operations.
pub type Result<T> = std::result::Result<T, BookingError>;
