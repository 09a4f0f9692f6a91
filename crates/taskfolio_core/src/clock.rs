//! Wall-clock helpers for timestamps and calendar dates.
//!
//! # Responsibility
//! - Produce RFC 3339 creation timestamps.
//! - Produce the ISO `YYYY-MM-DD` date strings used by due dates and time
//!   entries.
//!
//! # Invariants
//! - Date strings sort lexicographically in chronological order, which is
//!   what every date comparison in this crate relies on.

use time::format_description::well_known::Rfc3339;
use time::{Date, Duration, OffsetDateTime};

/// Returns the current UTC instant as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("RFC3339 formatting for UTC timestamp should never fail")
}

/// Returns today's UTC calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    format_date(OffsetDateTime::now_utc().date())
}

/// Returns the UTC calendar date `days` days from now as `YYYY-MM-DD`.
pub fn today_plus(days: i64) -> String {
    format_date((OffsetDateTime::now_utc() + Duration::days(days)).date())
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
