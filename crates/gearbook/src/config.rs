//! Configuration for the booking store.

/// Storage key the booking list lives under.
pub const DEFAULT_STORAGE_KEY: &str = "equipment-bookings";

/// Configuration for [`crate::BookingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the whole booking list is read from and written to.
    pub storage_key: String,
    /// Drop loaded records that break a store invariant (empty range, duplicate
    /// id, overlap with an earlier record) instead of keeping them verbatim.
    pub validate_on_load: bool,
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_validate_on_load(mut self, validate: bool) -> Self {
        self.validate_on_load = validate;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            validate_on_load: true,
        }
    }
}
