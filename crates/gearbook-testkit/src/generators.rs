//! Proptest generators for property-based testing.

use chrono::NaiveDate;
use proptest::prelude::*;

use gearbook_core::{BookingRequest, EquipmentId, SlotTime, DAY_START, SLOT_MINUTES};

/// Number of distinct slot times in a day (08:00 through 21:00).
const SLOT_COUNT: u16 = 27;

/// Generate a catalog item.
pub fn equipment() -> impl Strategy<Value = EquipmentId> {
    prop_oneof![Just(EquipmentId::Projector), Just(EquipmentId::MobileScreen)]
}

/// Generate one of a small window of dates so collisions are common.
pub fn date() -> impl Strategy<Value = NaiveDate> {
    (0u32..3).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 6, 1 + offset).unwrap_or_default()
    })
}

/// Generate a valid slot time.
pub fn slot_time() -> impl Strategy<Value = SlotTime> {
    (0..SLOT_COUNT).prop_map(slot_at)
}

/// Generate a non-empty `(start, end)` pair.
pub fn slot_range() -> impl Strategy<Value = (SlotTime, SlotTime)> {
    (0..SLOT_COUNT - 1)
        .prop_flat_map(|start| (Just(start), (start + 1)..SLOT_COUNT))
        .prop_map(|(start, end)| (slot_at(start), slot_at(end)))
}

/// Generate a user name.
pub fn user_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}".prop_map(String::from)
}

fn slot_at(index: u16) -> SlotTime {
    SlotTime::from_minutes(DAY_START + index * SLOT_MINUTES).unwrap_or(SlotTime::OPENING)
}

/// Parameters for generating a valid booking request.
#[derive(Debug, Clone)]
pub struct RequestParams {
    pub user_name: String,
    pub equipment: EquipmentId,
    pub date: NaiveDate,
    pub start: SlotTime,
    pub end: SlotTime,
}

impl Arbitrary for RequestParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (user_name(), equipment(), date(), slot_range())
            .prop_map(|(user_name, equipment, date, (start, end))| RequestParams {
                user_name,
                equipment,
                date,
                start,
                end,
            })
            .boxed()
    }
}

/// Build the raw form request for a set of parameters.
pub fn request_from_params(params: &RequestParams) -> BookingRequest {
    BookingRequest::new(
        params.user_name.clone(),
        params.equipment.as_str(),
        params.date.format("%Y-%m-%d").to_string(),
        params.start.to_string(),
        params.end.to_string(),
    )
}
