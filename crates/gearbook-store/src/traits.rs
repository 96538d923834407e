//! Persistence trait: the abstract interface the booking store writes through.

use serde_json::Value;

/// A key/value store of JSON values.
///
/// Implementations can be in-memory, file-backed, or SQLite. The booking store
/// reads its key once at startup and overwrites it after every mutation.
///
/// Neither method reports errors: `get` returns `None` when the key is missing
/// or unreadable, `set` returns `false` when the write did not happen.
pub trait Persistence: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value stored under `key`. Returns whether the write succeeded.
    fn set(&self, key: &str, value: &Value) -> bool;
}

impl<P: Persistence + ?Sized> Persistence for &P {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        (**self).set(key, value)
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        (**self).set(key, value)
    }
}

impl<P: Persistence + ?Sized> Persistence for std::sync::Arc<P> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> bool {
        (**self).set(key, value)
    }
}
