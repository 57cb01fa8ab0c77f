//! Compile timestamp embedded in the stub's version text.
//!
//! Compiled into build.rs, and into the crate only for its tests.

use chrono::{DateTime, Utc};

/// Same layout as the C preprocessor's `__DATE__ " " __TIME__`: `Mmm dd yyyy hh:mm:ss`
/// with a space-padded day.
pub fn format_build_time(time: DateTime<Utc>) -> String {
    time.format("%b %e %Y %H:%M:%S").to_string()
}

/// Seconds since the epoch, as carried by `SOURCE_DATE_EPOCH`.
pub fn parse_source_date_epoch(value: &str) -> Option<DateTime<Utc>> {
    value.trim()
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn single_digit_day_is_space_padded() {
        assert_eq!(format_build_time(at(1_791_363_903)), "Oct  7 2026 09:05:03");
    }

    #[test]
    fn two_digit_day() {
        assert_eq!(format_build_time(at(1_792_281_599)), "Oct 17 2026 23:59:59");
        assert_eq!(format_build_time(at(0)), "Jan  1 1970 00:00:00");
    }

    #[test]
    fn source_date_epoch() {
        assert_eq!(parse_source_date_epoch("1791363903"), Some(at(1_791_363_903)));
        assert_eq!(parse_source_date_epoch(" 0\n"), Some(at(0)));
        assert_eq!(parse_source_date_epoch(""), None);
        assert_eq!(parse_source_date_epoch("yesterday"), None);
        assert_eq!(parse_source_date_epoch("12.5"), None);
    }
}
