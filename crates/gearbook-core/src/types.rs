//! Strong type definitions for gearbook.
//!
//! Identifiers are newtypes so a booking id cannot be passed where a user name
//! is expected.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_PREFIX: &str = "booking";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// An opaque booking identifier.
///
/// Generated ids have the form `booking-<unix millis>-<9 base36 chars>`, but any
/// string loaded from storage is accepted as-is.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier using the thread-local RNG.
    pub fn generate(now_millis: i64) -> Self {
        Self::generate_with(&mut rand::thread_rng(), now_millis)
    }

    /// Generate a fresh identifier from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, now_millis: i64) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}-{}-{}", ID_PREFIX, now_millis, suffix))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingId({})", self.0)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BookingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BookingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
