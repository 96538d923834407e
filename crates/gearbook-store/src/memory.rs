//! In-memory implementation of the Persistence trait.
//!
//! This is primarily for testing. It has the same semantics as the durable
//! providers but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

use serde_json::Value;

use crate::traits::Persistence;

/// In-memory persistence provider.
///
/// All data is lost when the provider is dropped. Thread-safe via RwLock.
/// Writes can be switched off to exercise the best-effort path.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    values: RwLock<HashMap<String, Value>>,
    read_only: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryPersistence {
    /// Create a new empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider pre-seeded with one key.
    pub fn with_value(key: impl Into<String>, value: Value) -> Self {
        let provider = Self::new();
        if let Ok(mut values) = provider.values.write() {
            values.insert(key.into(), value);
        }
        provider
    }

    /// When set, every `set` call is rejected and returns `false`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Persistence for MemoryPersistence {
    fn get(&self, key: &str) -> Option<Value> {
        match self.values.read() {
            Ok(values) => values.get(key).cloned(),
            Err(e) => {
                tracing::warn!(key, "memory persistence lock poisoned: {}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        if self.read_only.load(Ordering::SeqCst) {
            tracing::debug!(key, "memory persistence is read-only, dropping write");
            return false;
        }

        match self.values.write() {
            Ok(mut values) => {
                values.insert(key.to_owned(), value.clone());
                self.writes.fetch_add(1, Ordering::SeqCst);
                true
            }
            Err(e) => {
                tracing::warn!(key, "memory persistence lock poisoned: {}", e);
                false
            }
        }
    }
}
