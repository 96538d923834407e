//! Calendar helpers for the date pickers.

use chrono::{NaiveDate, Utc};

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `days` consecutive dates starting at `today`.
pub fn date_options(today: NaiveDate, days: usize) -> Vec<NaiveDate> {
    today.iter_days().take(days).collect()
}

/// Long display form, e.g. `Sun, June 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %B %-d, %Y").to_string()
}
