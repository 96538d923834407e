//! Booking: a reservation of one equipment item for a date and slot range.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentId;
use crate::slot::{SlotRange, SlotTime};
use crate::types::BookingId;
use crate::validation::ValidRequest;

/// A stored booking.
///
/// Created only from a validated request; never mutated afterwards. The serde
/// form uses camelCase keys (`userName`, `equipmentId`, `startTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_name: String,
    pub equipment_id: EquipmentId,
    pub date: NaiveDate,
    pub start_time: SlotTime,
    pub end_time: SlotTime,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Build a booking from a validated request.
    pub fn from_request(id: BookingId, request: ValidRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_name: request.user_name,
            equipment_id: request.equipment_id,
            date: request.date,
            start_time: request.range.start,
            end_time: request.range.end,
            created_at,
        }
    }

    /// The occupied interval.
    pub fn range(&self) -> SlotRange {
        SlotRange {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// Whether this booking holds `equipment` on `date`.
    pub fn occupies(&self, equipment: EquipmentId, date: NaiveDate) -> bool {
        self.equipment_id == equipment && self.date == date
    }

    /// Whether a candidate range on the same equipment and date would collide.
    pub fn conflicts_with(
        &self,
        equipment: EquipmentId,
        date: NaiveDate,
        range: &SlotRange,
    ) -> bool {
        self.occupies(equipment, date) && self.range().overlaps(range)
    }

    /// True once the booking's end lies strictly before `now`.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        let end_secs = u32::from(self.end_time.minutes()) * 60;
        match self.date.cmp(&now.date()) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => now.time().num_seconds_from_midnight() > end_secs,
        }
    }
}

/// A candidate booking as submitted from the form.
///
/// All fields are raw strings; see [`crate::validate_request`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_name: String,
    pub equipment_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl BookingRequest {
    pub fn new(
        user_name: impl Into<String>,
        equipment_id: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            equipment_id: equipment_id.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// The blank form: no name or equipment, `date`, 09:00 to 10:00.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            ..Self::default()
        }
    }
}
