//! Error types for gearbook core.

use thiserror::Error;

use crate::slot::SlotTime;

/// The form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    UserName,
    Equipment,
    Date,
    Time,
}

/// Validation errors for a candidate booking.
///
/// The `Display` text is user-facing and shown next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter the name of the person booking")]
    MissingUserName,

    #[error("please choose a piece of equipment")]
    MissingEquipment,

    #[error("unknown equipment: {0}")]
    UnknownEquipment(String),

    #[error("please choose a date")]
    MissingDate,

    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid time: {0} (expected HH:MM on the half hour between 08:00 and 21:00)")]
    InvalidTime(String),

    #[error("end time must be later than start time ({start} - {end})")]
    EndNotAfterStart { start: SlotTime, end: SlotTime },
}

impl ValidationError {
    /// The field this error should be displayed against.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingUserName => Field::UserName,
            ValidationError::MissingEquipment | ValidationError::UnknownEquipment(_) => {
                Field::Equipment
            }
            ValidationError::MissingDate | ValidationError::InvalidDate(_) => Field::Date,
            ValidationError::InvalidTime(_) | ValidationError::EndNotAfterStart { .. } => {
                Field::Time
            }
        }
    }
}
