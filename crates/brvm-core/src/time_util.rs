//! Calendar and display-time helpers.
//!
//! Snapshot files are keyed by the local calendar date. The "last update"
//! string shown when the market status is unknown uses the exchange's
//! day-first format.

use chrono::{Local, NaiveDate};

/// Day-first timestamp format used for `last_update`.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Today's date in local time.
#[inline]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `YYYY-MM-DD`, as embedded in snapshot file names.
#[inline]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Current local time in [`DISPLAY_FORMAT`].
pub fn display_now() -> String {
    Local::now().format(DISPLAY_FORMAT).to_string()
}
