//! Expiry arithmetic and the RFC-1123 date form written into cookie entries.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

/// `Sun, 06 Nov 1994 08:49:37 GMT`
const RFC1123: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Returns the UTC moment `days` days from now. Negative values produce a
/// past date, which the jar treats as delete-by-expiring.
pub fn days_from_now(days: i64) -> OffsetDateTime {
    OffsetDateTime::now_utc() + Duration::days(days)
}

/// Formats a UTC moment as an RFC-1123 date string.
pub fn format_rfc1123(moment: OffsetDateTime) -> String {
    moment.format(RFC1123).expect("RFC-1123 formatting")
}

/// Parses an RFC-1123 date string. `None` for anything else.
pub fn parse_rfc1123(value: &str) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(value.trim(), RFC1123)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
