//! Request validation: turns raw form input into typed booking fields.

use chrono::NaiveDate;

use crate::booking::{Booking, BookingRequest};
use crate::equipment::EquipmentId;
use crate::error::ValidationError;
use crate::slot::{SlotRange, SlotTime};

/// A request whose fields all parsed and whose range is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub user_name: String,
    pub equipment_id: EquipmentId,
    pub date: NaiveDate,
    pub range: SlotRange,
}

/// Validate a candidate booking.
///
/// Checks run in form order and the first failure is returned:
/// user name, equipment, date, then the time range.
pub fn validate_request(request: &BookingRequest) -> Result<ValidRequest, ValidationError> {
    let user_name = check_user_name(&request.user_name)?;
    let equipment_id = check_equipment(&request.equipment_id)?;
    let date = check_date(&request.date)?;
    let range = check_range(&request.start_time, &request.end_time)?;

    Ok(ValidRequest {
        user_name,
        equipment_id,
        date,
        range,
    })
}

/// Run every check and return all failures, one per field at most.
pub fn collect_issues(request: &BookingRequest) -> Vec<ValidationError> {
    [
        check_user_name(&request.user_name).err(),
        check_equipment(&request.equipment_id).err(),
        check_date(&request.date).err(),
        check_range(&request.start_time, &request.end_time).err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Structural checks for a record that did not come through [`validate_request`],
/// e.g. one loaded from storage.
pub fn validate_booking(booking: &Booking) -> Result<(), ValidationError> {
    if booking.user_name.trim().is_empty() {
        return Err(ValidationError::MissingUserName);
    }
    SlotRange::new(booking.start_time, booking.end_time)?;
    Ok(())
}

fn check_user_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingUserName);
    }
    Ok(name.to_owned())
}

fn check_equipment(raw: &str) -> Result<EquipmentId, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ValidationError::MissingEquipment);
    }
    id.parse()
}

fn check_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let date = raw.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date.to_owned()))
}

fn check_range(start: &str, end: &str) -> Result<SlotRange, ValidationError> {
    let start = SlotTime::parse(start)?;
    let end = SlotTime::parse(end)?;
    SlotRange::new(start, end)
}
