//! The booking store: an ordered collection of bookings mirrored to a
//! persistence provider.
//!
//! The store is the only writer of its storage key. It reads the key once in
//! [`BookingStore::open`] and overwrites it after every mutation. Conflict
//! detection is a linear scan over the collection (O(n) per insert); the
//! expected size is a few dozen bookings across two equipment items.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use gearbook_core::{
    validate_booking, validate_request, Booking, BookingId, BookingRequest, EquipmentId,
    SlotRange,
};
use gearbook_store::Persistence;

use crate::config::StoreConfig;
use crate::error::{BookingError, Result};

/// The booking store.
///
/// Provides:
/// - Validated, conflict-checked inserts
/// - Idempotent cancellation
/// - Per-equipment day schedules and a full sorted listing
pub struct BookingStore<P: Persistence> {
    /// The persistence provider.
    persistence: P,
    /// Configuration.
    config: StoreConfig,
    /// Bookings in insertion order.
    bookings: Vec<Booking>,
}

impl<P: Persistence> BookingStore<P> {
    /// Open a store with the default configuration.
    pub fn new(persistence: P) -> Self {
        Self::open(persistence, StoreConfig::default())
    }

    /// Open a store, loading any bookings already saved under the configured key.
    ///
    /// A missing key yields an empty store, as does a value that is not a list.
    /// Individual records that fail to decode are logged and skipped.
    pub fn open(persistence: P, config: StoreConfig) -> Self {
        let bookings = match persistence.get(&config.storage_key) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => decode_bookings(value, &config),
        };

        tracing::debug!(
            key = %config.storage_key,
            count = bookings.len(),
            "opened booking store"
        );

        Self {
            persistence,
            config,
            bookings,
        }
    }

    /// Get the persistence provider.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validate and insert a candidate booking, stamped with the current time.
    pub fn try_insert(&mut self, request: &BookingRequest) -> Result<Booking> {
        self.try_insert_at(request, Utc::now())
    }

    /// Validate and insert a candidate booking created at `now`.
    ///
    /// Fails with [`BookingError::Validation`] for bad input and with
    /// [`BookingError::Conflict`] carrying the earliest-inserted overlapping
    /// booking on the same equipment and date. On failure nothing changes.
    pub fn try_insert_at(
        &mut self,
        request: &BookingRequest,
        now: DateTime<Utc>,
    ) -> Result<Booking> {
        let valid = validate_request(request)?;

        if let Some(existing) = self.find_conflict(valid.equipment_id, valid.date, &valid.range) {
            tracing::debug!(
                equipment = %valid.equipment_id,
                date = %valid.date,
                requested = %valid.range,
                existing = %existing.id,
                "booking rejected: slot taken"
            );
            return Err(BookingError::Conflict {
                existing: existing.clone(),
            });
        }

        let id = self.fresh_id(now);
        let booking = Booking::from_request(id, valid, now);
        self.bookings.push(booking.clone());
        self.persist();

        tracing::debug!(
            id = %booking.id,
            equipment = %booking.equipment_id,
            date = %booking.date,
            range = %booking.range(),
            "booking inserted"
        );
        Ok(booking)
    }

    /// Remove a booking by id.
    ///
    /// Idempotent: an unknown id leaves the collection unchanged. The list is
    /// persisted afterwards either way.
    pub fn cancel(&mut self, id: &BookingId) -> Option<Booking> {
        let removed = self
            .bookings
            .iter()
            .position(|b| &b.id == id)
            .map(|index| self.bookings.remove(index));

        self.persist();

        match &removed {
            Some(booking) => tracing::debug!(id = %booking.id, "booking cancelled"),
            None => tracing::debug!(id = %id, "cancel of unknown booking ignored"),
        }
        removed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The first booking, in insertion order, that holds `equipment` on `date`
    /// during any part of `range`.
    pub fn find_conflict(
        &self,
        equipment: EquipmentId,
        date: NaiveDate,
        range: &SlotRange,
    ) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.conflicts_with(equipment, date, range))
    }

    /// Bookings for one equipment item on one date, ascending by start time.
    ///
    /// The sort is stable, so equal start times keep insertion order.
    pub fn schedule_for(&self, equipment: EquipmentId, date: NaiveDate) -> Vec<Booking> {
        let mut schedule: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| b.occupies(equipment, date))
            .cloned()
            .collect();
        schedule.sort_by_key(|b| b.start_time);
        schedule
    }

    /// Every booking, ascending by (date, start time).
    pub fn all_sorted(&self) -> Vec<Booking> {
        let mut all = self.bookings.clone();
        all.sort_by_key(|b| (b.date, b.start_time));
        all
    }

    /// [`Self::schedule_for`] for every catalog item on `date`, in catalog order.
    pub fn day_board(&self, date: NaiveDate) -> Vec<(EquipmentId, Vec<Booking>)> {
        EquipmentId::ALL
            .into_iter()
            .map(|equipment| (equipment, self.schedule_for(equipment, date)))
            .collect()
    }

    /// Get a booking by id.
    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    /// All bookings in insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the whole list under the storage key. Failures are logged only.
    fn persist(&self) {
        let value = match serde_json::to_value(&self.bookings) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to encode bookings: {}", e);
                return;
            }
        };

        if !self.persistence.set(&self.config.storage_key, &value) {
            tracing::warn!(
                key = %self.config.storage_key,
                "failed to persist bookings; continuing with in-memory state"
            );
        }
    }

    fn fresh_id(&self, now: DateTime<Utc>) -> BookingId {
        loop {
            let id = BookingId::generate(now.timestamp_millis());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Decode a persisted list, optionally dropping records that break an invariant.
///
/// Records are decoded one at a time; an undecodable record is logged and
/// skipped without affecting its neighbours. A value that is not an array
/// yields an empty list.
fn decode_bookings(value: Value, config: &StoreConfig) -> Vec<Booking> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            tracing::warn!(
                key = %config.storage_key,
                kind = json_kind(&other),
                "stored bookings are not a list, starting empty"
            );
            return Vec::new();
        }
    };

    let loaded: Vec<Booking> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(booking) => Some(booking),
            Err(e) => {
                tracing::warn!(index, "dropping undecodable stored booking: {}", e);
                None
            }
        })
        .collect();

    if !config.validate_on_load {
        return loaded;
    }

    let mut kept: Vec<Booking> = Vec::with_capacity(loaded.len());
    let mut ids = HashSet::new();

    for booking in loaded {
        if let Err(e) = validate_booking(&booking) {
            tracing::warn!(id = %booking.id, "dropping invalid stored booking: {}", e);
            continue;
        }
        if ids.contains(&booking.id) {
            tracing::warn!(id = %booking.id, "dropping stored booking with duplicate id");
            continue;
        }
        let range = booking.range();
        if let Some(clash) = kept
            .iter()
            .find(|k| k.conflicts_with(booking.equipment_id, booking.date, &range))
        {
            tracing::warn!(
                id = %booking.id,
                overlaps = %clash.id,
                "dropping stored booking that overlaps an earlier one"
            );
            continue;
        }

        ids.insert(booking.id.clone());
        kept.push(booking);
    }

    kept
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gearbook_core::SlotTime;
    use gearbook_store::MemoryPersistence;
    use serde_json::json;

    fn request(name: &str, equipment: &str, date: &str, start: &str, end: &str) -> BookingRequest {
        BookingRequest::new(name, equipment, date, start, end)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stored(id: &str, equipment: &str, day: &str, start: &str, end: &str) -> Value {
        json!({
            "id": id,
            "userName": "Stored",
            "equipmentId": equipment,
            "date": day,
            "startTime": start,
            "endTime": end,
            "createdAt": "2025-05-01T00:00:00Z",
        })
    }

    #[test]
    fn test_insert_conflict_and_adjacent() {
        let mut store = BookingStore::new(MemoryPersistence::new());

        let alice = store
            .try_insert(&request("Alice", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();

        let err = store
            .try_insert(&request("Bob", "projector", "2025-06-01", "09:30", "10:30"))
            .unwrap_err();
        assert_eq!(err.conflicting_booking(), Some(&alice));
        assert_eq!(
            err.to_string(),
            "time conflict: Projector is already booked 09:00-10:00 by Alice"
        );

        store
            .try_insert(&request("Bob", "projector", "2025-06-01", "10:00", "11:00"))
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_conflict_reports_earliest_inserted() {
        let mut store = BookingStore::new(MemoryPersistence::new());
        let later_in_day = store
            .try_insert(&request("A", "projector", "2025-06-01", "11:00", "12:00"))
            .unwrap();
        store
            .try_insert(&request("B", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();

        let err = store
            .try_insert(&request("C", "projector", "2025-06-01", "09:00", "12:00"))
            .unwrap_err();
        assert_eq!(err.conflicting_booking(), Some(&later_in_day));
    }

    #[test]
    fn test_validation_failure_has_no_side_effect() {
        let storage = MemoryPersistence::new();
        let mut store = BookingStore::new(&storage);

        let err = store
            .try_insert(&request("", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));
        assert!(store.is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_other_equipment_or_date_does_not_conflict() {
        let mut store = BookingStore::new(MemoryPersistence::new());
        store
            .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();
        store
            .try_insert(&request("B", "mobile-screen", "2025-06-01", "09:00", "10:00"))
            .unwrap();
        store
            .try_insert(&request("C", "projector", "2025-06-02", "09:00", "10:00"))
            .unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_cancel_is_idempotent_and_persists() {
        let storage = MemoryPersistence::new();
        let mut store = BookingStore::new(&storage);
        let booking = store
            .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();

        assert_eq!(store.cancel(&booking.id), Some(booking.clone()));
        assert_eq!(store.cancel(&booking.id), None);
        assert_eq!(store.cancel(&BookingId::new("nope")), None);
        assert!(store.is_empty());
        assert_eq!(storage.get("equipment-bookings"), Some(json!([])));
    }

    #[test]
    fn test_schedule_for_sorted_and_stable() {
        let mut store = BookingStore::new(MemoryPersistence::new());
        let day = "2025-06-01";
        store.try_insert(&request("Late", "projector", day, "15:00", "16:00")).unwrap();
        store.try_insert(&request("Early", "projector", day, "08:00", "09:00")).unwrap();
        store.try_insert(&request("Screen", "mobile-screen", day, "08:00", "09:00")).unwrap();

        let names: Vec<String> = store
            .schedule_for(EquipmentId::Projector, date(day))
            .into_iter()
            .map(|b| b.user_name)
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);

        let board = store.day_board(date(day));
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].0, EquipmentId::Projector);
        assert_eq!(board[1].1.len(), 1);
    }

    #[test]
    fn test_schedule_ties_keep_insertion_order() {
        // Ties only arise in unvalidated loaded data.
        let storage = MemoryPersistence::with_value(
            "equipment-bookings",
            json!([
                stored("first", "projector", "2025-06-01", "09:00", "10:00"),
                stored("second", "projector", "2025-06-01", "09:00", "09:30"),
            ]),
        );
        let store = BookingStore::open(
            storage,
            StoreConfig::default().with_validate_on_load(false),
        );

        let ids: Vec<String> = store
            .schedule_for(EquipmentId::Projector, date("2025-06-01"))
            .into_iter()
            .map(|b| b.id.to_string())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_all_sorted_by_date_then_start() {
        let mut store = BookingStore::new(MemoryPersistence::new());
        store.try_insert(&request("C", "projector", "2025-06-02", "08:00", "09:00")).unwrap();
        store.try_insert(&request("B", "mobile-screen", "2025-06-01", "13:00", "14:00")).unwrap();
        store.try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00")).unwrap();

        let names: Vec<String> = store.all_sorted().into_iter().map(|b| b.user_name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        // insertion order untouched
        assert_eq!(store.bookings()[0].user_name, "C");
    }

    #[test]
    fn test_open_reloads_saved_state() {
        let storage = MemoryPersistence::new();
        let booking = {
            let mut store = BookingStore::new(&storage);
            store
                .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
                .unwrap()
        };

        let reopened = BookingStore::new(&storage);
        assert_eq!(reopened.bookings(), &[booking]);
    }

    #[test]
    fn test_open_ignores_undecodable_value() {
        let storage = MemoryPersistence::with_value("equipment-bookings", json!({"not": "a list"}));
        let store = BookingStore::new(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_drops_records_breaking_invariants() {
        let storage = MemoryPersistence::with_value(
            "equipment-bookings",
            json!([
                stored("a", "projector", "2025-06-01", "09:00", "10:00"),
                stored("b", "projector", "2025-06-01", "09:30", "10:30"),
                stored("a", "mobile-screen", "2025-06-01", "09:00", "10:00"),
                stored("c", "projector", "2025-06-01", "12:00", "11:00"),
                stored("d", "projector", "2025-06-01", "10:00", "11:00"),
            ]),
        );
        let store = BookingStore::new(storage);

        let ids: Vec<&str> = store.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_open_skips_undecodable_records_only() {
        let storage = MemoryPersistence::with_value(
            "equipment-bookings",
            json!([
                stored("a", "projector", "2025-06-01", "09:00", "10:00"),
                stored("off-grid", "projector", "2025-06-01", "11:15", "12:00"),
                stored("unknown", "overhead", "2025-06-01", "13:00", "14:00"),
                stored("bad-date", "projector", "2025-13-45", "15:00", "16:00"),
                stored("e", "mobile-screen", "2025-06-01", "09:00", "10:00"),
            ]),
        );
        let mut store = BookingStore::new(&storage);

        let ids: Vec<&str> = store.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);

        let err = store
            .try_insert(&request("Bob", "projector", "2025-06-01", "09:30", "10:30"))
            .unwrap_err();
        assert_eq!(err.conflicting_booking().map(|b| b.id.as_str()), Some("a"));

        store
            .try_insert(&request("Carol", "projector", "2025-06-01", "13:00", "14:00"))
            .unwrap();

        let saved = storage.get("equipment-bookings").unwrap();
        let saved_ids: Vec<&str> = saved
            .as_array()
            .unwrap()
            .iter()
            .map(|record| record["id"].as_str().unwrap())
            .collect();
        assert_eq!(saved_ids.len(), 3);
        assert_eq!(&saved_ids[..2], &["a", "e"]);
    }

    #[test]
    fn test_persistence_failure_is_swallowed() {
        let storage = MemoryPersistence::new();
        storage.set_read_only(true);
        let mut store = BookingStore::new(&storage);

        let booking = store
            .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();
        assert_eq!(store.get(&booking.id), Some(&booking));
        assert_eq!(storage.get("equipment-bookings"), None);
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryPersistence::new();
        let mut store = BookingStore::open(
            &storage,
            StoreConfig::default().with_storage_key("lab-bookings"),
        );
        store
            .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();

        assert!(storage.get("lab-bookings").is_some());
        assert!(storage.get("equipment-bookings").is_none());
    }

    #[test]
    fn test_find_conflict_preview() {
        let mut store = BookingStore::new(MemoryPersistence::new());
        store
            .try_insert(&request("A", "projector", "2025-06-01", "09:00", "10:00"))
            .unwrap();

        let slot = |s: &str| SlotTime::parse(s).unwrap();
        let range = SlotRange::new(slot("08:00"), slot("09:30")).unwrap();
        let hit = store.find_conflict(EquipmentId::Projector, date("2025-06-01"), &range);
        assert_eq!(hit.map(|b| b.user_name.as_str()), Some("A"));

        let free = SlotRange::new(slot("08:00"), slot("09:00")).unwrap();
        assert!(store
            .find_conflict(EquipmentId::Projector, date("2025-06-01"), &free)
            .is_none());
    }
}
