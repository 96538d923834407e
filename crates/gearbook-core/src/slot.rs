//! Slot times: minute-of-day values quantized to half hours.
//!
//! Bookable times run from 08:00 to 21:00 inclusive in 30 minute steps. A
//! booking occupies the half-open interval `[start, end)`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Slot granularity in minutes.
pub const SLOT_MINUTES: u16 = 30;

/// First bookable minute of the day (08:00).
pub const DAY_START: u16 = 8 * 60;

/// Last bookable minute of the day (21:00).
pub const DAY_END: u16 = 21 * 60;

/// A minute-of-day on a slot boundary between [`DAY_START`] and [`DAY_END`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotTime(u16);

impl SlotTime {
    /// 08:00.
    pub const OPENING: Self = Self(DAY_START);

    /// 21:00.
    pub const CLOSING: Self = Self(DAY_END);

    /// Create from a minute-of-day. Returns `None` off-grid or outside opening hours.
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= DAY_START && minutes <= DAY_END && minutes % SLOT_MINUTES == 0 {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Create from hour and minute.
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 || hour > 23 {
            return None;
        }
        Self::from_minutes(hour * 60 + minute)
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Every valid slot time in ascending order (08:00, 08:30, ..., 21:00).
    pub fn options() -> impl Iterator<Item = SlotTime> {
        (DAY_START..=DAY_END)
            .step_by(SLOT_MINUTES as usize)
            .map(SlotTime)
    }

    /// Parse an `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTime(s.to_owned());

        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || m.len() != 2 || !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl FromStr for SlotTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotTime({})", self)
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SlotTime::parse(&s).map_err(de::Error::custom)
    }
}

/// A half-open `[start, end)` interval of slot times.
///
/// [`SlotRange::new`] enforces `start < end`. The fields are public so stored
/// records can be viewed as ranges without re-validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    pub start: SlotTime,
    pub end: SlotTime,
}

impl SlotRange {
    /// Create a range, rejecting empty or inverted intervals.
    pub fn new(start: SlotTime, end: SlotTime) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Half-open overlap test: `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &SlotRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(s: &str) -> SlotTime {
        SlotTime::parse(s).unwrap()
    }

    fn range(start: &str, end: &str) -> SlotRange {
        SlotRange::new(t(start), t(end)).unwrap()
    }

    #[test]
    fn test_options_cover_opening_hours() {
        let options: Vec<String> = SlotTime::options().map(|s| s.to_string()).collect();
        assert_eq!(options.len(), 27);
        assert_eq!(options.first().unwrap(), "08:00");
        assert_eq!(options[1], "08:30");
        assert_eq!(options.last().unwrap(), "21:00");
    }

    #[test]
    fn test_parse_rejects_off_grid_and_out_of_hours() {
        assert!(SlotTime::parse("09:15").is_err());
        assert!(SlotTime::parse("07:30").is_err());
        assert!(SlotTime::parse("21:30").is_err());
        assert!(SlotTime::parse("9").is_err());
        assert!(SlotTime::parse("09:0").is_err());
        assert!(SlotTime::parse("+9:00").is_err());
        assert!(SlotTime::parse("").is_err());
        assert_eq!(t("09:30").minutes(), 570);
        assert_eq!(t("9:30"), t("09:30"));
    }

    #[test]
    fn test_range_requires_end_after_start() {
        assert!(matches!(
            SlotRange::new(t("10:00"), t("10:00")),
            Err(ValidationError::EndNotAfterStart { .. })
        ));
        assert!(SlotRange::new(t("11:00"), t("10:00")).is_err());
        assert_eq!(range("09:00", "10:30").duration_minutes(), 90);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let alice = range("09:00", "10:00");
        assert!(alice.overlaps(&range("09:30", "10:30")));
        assert!(alice.overlaps(&range("08:00", "21:00")));
        assert!(!alice.overlaps(&range("10:00", "11:00")));
        assert!(!alice.overlaps(&range("08:00", "09:00")));
    }

    #[test]
    fn test_serde_uses_hh_mm() {
        let json = serde_json::to_string(&t("08:30")).unwrap();
        assert_eq!(json, "\"08:30\"");
        assert!(serde_json::from_str::<SlotTime>("\"08:45\"").is_err());
    }

    fn slot() -> impl Strategy<Value = SlotTime> {
        (0u16..27).prop_map(|i| SlotTime::from_minutes(DAY_START + i * SLOT_MINUTES).unwrap())
    }

    proptest! {
        #[test]
        fn test_overlap_symmetric(a in slot(), b in slot(), c in slot(), d in slot()) {
            prop_assume!(a < b && c < d);
            let x = SlotRange::new(a, b).unwrap();
            let y = SlotRange::new(c, d).unwrap();
            prop_assert_eq!(x.overlaps(&y), y.overlaps(&x));
        }

        #[test]
        fn test_display_parse_roundtrip(s in slot()) {
            prop_assert_eq!(SlotTime::parse(&s.to_string()).unwrap(), s);
        }
    }
}
