//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use gearbook::{BookingStore, Result, StoreConfig};
use gearbook_core::{Booking, BookingRequest};
use gearbook_store::MemoryPersistence;

/// Creation timestamp stamped on every fixture booking (2025-06-01T00:00:00Z).
pub const FIXED_NOW: i64 = 1_748_736_000;

/// A booking store over shared in-memory persistence.
///
/// The persistence handle is shared so a test can reopen a second store over
/// the same data.
pub struct TestFixture {
    pub storage: Arc<MemoryPersistence>,
    pub store: BookingStore<Arc<MemoryPersistence>>,
}

impl TestFixture {
    /// Create a fixture with empty storage and the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let storage = Arc::new(MemoryPersistence::new());
        let store = BookingStore::open(Arc::clone(&storage), config);
        Self { storage, store }
    }

    /// Open a second store over the same storage, as a fresh session would.
    pub fn reopen(&self) -> BookingStore<Arc<MemoryPersistence>> {
        BookingStore::open(Arc::clone(&self.storage), self.store.config().clone())
    }

    /// The fixed creation time.
    pub fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(FIXED_NOW, 0).unwrap_or_default()
    }

    /// Submit a booking built from raw form fields.
    pub fn book(
        &mut self,
        user_name: &str,
        equipment_id: &str,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<Booking> {
        let request = BookingRequest::new(user_name, equipment_id, date, start, end);
        self.submit(&request)
    }

    /// Submit a prepared request.
    pub fn submit(&mut self, request: &BookingRequest) -> Result<Booking> {
        let now = self.now();
        self.store.try_insert_at(request, now)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Panic if any two bookings share equipment and date and overlap.
pub fn assert_no_overlaps(bookings: &[Booking]) {
    for (i, a) in bookings.iter().enumerate() {
        for b in &bookings[i + 1..] {
            assert!(
                !a.conflicts_with(b.equipment_id, b.date, &b.range()),
                "bookings {} ({} {} {}) and {} ({} {} {}) overlap",
                a.id,
                a.equipment_id,
                a.date,
                a.range(),
                b.id,
                b.equipment_id,
                b.date,
                b.range()
            );
        }
    }
}
