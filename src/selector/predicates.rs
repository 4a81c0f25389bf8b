//! Path-match and expiration predicates.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::trace;

/// Case-insensitive substring containment of `store_path` in `current_path`.
///
/// Containment, not equality: `"shoes"` matches both `"shoes/red"` and
/// `"running-shoes"`. An empty fragment never matches.
///
/// # Examples
///
/// ```
/// use store_banner::selector::match_path;
///
/// assert!(match_path("Store/Running-Shoes", "shoes"));
/// assert!(!match_path("store/hats", "shoes"));
/// assert!(!match_path("store/hats", ""));
/// ```
pub fn match_path(current_path: &str, store_path: &str) -> bool {
    if store_path.is_empty() {
        return false;
    }
    let matched = current_path
        .to_lowercase()
        .contains(&store_path.to_lowercase());
    trace!(current_path, store_path, matched, "path comparison");
    matched
}

/// Parses a `YYYY-MM-DD` end date. Surrounding whitespace is ignored.
pub fn parse_end_date(end_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(end_date.trim(), "%Y-%m-%d").ok()
}

/// Last instant (millisecond precision) of the given UTC calendar day.
///
/// `None` only for the final representable day.
pub fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    midnight
        .checked_add_signed(Duration::days(1))?
        .checked_sub_signed(Duration::milliseconds(1))
}

/// Returns `true` iff `now` is strictly after the last millisecond of
/// `end_date`'s day. Empty or unparsable dates never expire.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use store_banner::selector::is_expired;
///
/// let during = Utc.with_ymd_and_hms(2023, 2, 14, 23, 59, 59).unwrap();
/// let after = Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap();
///
/// assert!(!is_expired("2023-02-14", during));
/// assert!(is_expired("2023-02-14", after));
/// assert!(!is_expired("", after));
/// ```
pub fn is_expired(end_date: &str, now: DateTime<Utc>) -> bool {
    match parse_end_date(end_date) {
        Some(date) => end_of_day(date).is_some_and(|end| now > end),
        None => {
            if !end_date.is_empty() {
                tracing::debug!(end_date, "unparsable end date treated as open-ended");
            }
            false
        }
    }
}
