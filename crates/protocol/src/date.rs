//! Date parsing and day-count arithmetic.
//!
//! Every day delta in the application goes through [`days_until`] so that
//! all views agree on boundary behavior.
//!
//! # Rounding rule
//!
//! The delta is the *ceiling* of `(date - now)` expressed in whole 24-hour
//! days. A renewal due in 2 days and 1 minute is "3 days left"; a renewal
//! that passed 1 hour ago is "0 days left"; one that passed 25 hours ago is
//! "-1 days left". Negative values mean overdue and are never clamped.
//!
//! # Accepted formats
//!
//! - Calendar dates (`2024-01-15`), interpreted as midnight UTC
//! - RFC 3339 timestamps (`2024-01-15T09:30:00+02:00`)

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{ProtocolError, Result};

/// Seconds in one calendar day.
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses a date string into a UTC instant.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDate`] if the value is neither a calendar
/// date nor an RFC 3339 timestamp.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::date::parse_date;
///
/// let instant = parse_date("2024-01-15").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2024-01-15T00:00:00+00:00");
///
/// assert!(parse_date("next tuesday").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|source| ProtocolError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

/// Parses a date string and returns only its calendar date (in UTC).
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDate`] if the value cannot be parsed.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate> {
    parse_date(value).map(|instant| instant.date_naive())
}

/// Returns the number of whole days from `now` until `date`, rounded up.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use sitekeeper_protocol::date::days_until;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
///
/// assert_eq!(days_until(now + Duration::days(10), now), 10);
/// assert_eq!(days_until(now + Duration::hours(1), now), 1);
/// assert_eq!(days_until(now - Duration::hours(1), now), 0);
/// assert_eq!(days_until(now - Duration::days(5), now), -5);
/// ```
#[must_use]
pub fn days_until(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = date - now;
    // `num_seconds` truncates toward zero and `subsec_nanos` carries the
    // sign of the delta, so only a positive remainder can push past a day.
    let secs = delta.num_seconds();
    let whole = secs.div_euclid(SECS_PER_DAY);
    if secs.rem_euclid(SECS_PER_DAY) == 0 && delta.subsec_nanos() <= 0 {
        whole
    } else {
        whole + 1
    }
}

/// Parses `value` and returns [`days_until`] for it.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDate`] if the value cannot be parsed.
pub fn days_until_str(value: &str, now: DateTime<Utc>) -> Result<i64> {
    parse_date(value).map(|date| days_until(date, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_calendar_dates_as_utc_midnight() {
        let parsed = parse_date("2024-01-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_date("2024-01-15T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_date("  2024-01-15 ").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        for value in ["", "soon", "2024-02-30", "15/01/2024"] {
            let err = parse_date(value).unwrap_err();
            assert!(
                matches!(err, ProtocolError::InvalidDate { value: ref v, .. } if v == value),
                "expected InvalidDate for {value:?}"
            );
        }
    }

    #[test]
    fn calendar_date_drops_time() {
        let date = parse_calendar_date("2024-01-15T23:59:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn exact_days_are_not_rounded() {
        assert_eq!(days_until(noon() + Duration::days(3), noon()), 3);
        assert_eq!(days_until(noon(), noon()), 0);
        assert_eq!(days_until(noon() - Duration::days(3), noon()), -3);
    }

    #[test]
    fn partial_days_round_up() {
        let now = noon();
        assert_eq!(days_until(now + Duration::days(2) + Duration::minutes(1), now), 3);
        assert_eq!(days_until(now + Duration::milliseconds(1), now), 1);
        assert_eq!(days_until(now - Duration::hours(25), now), -1);
        assert_eq!(days_until(now - Duration::milliseconds(1), now), 0);
    }

    #[test]
    fn sub_millisecond_remainders_round_up() {
        let now = noon();
        assert_eq!(days_until(now + Duration::days(4) + Duration::microseconds(300), now), 5);
        assert_eq!(days_until(now + Duration::nanoseconds(1), now), 1);
        assert_eq!(days_until(now - Duration::days(1) - Duration::microseconds(300), now), -1);
        assert_eq!(days_until(now - Duration::nanoseconds(1), now), 0);
    }

    #[test]
    fn calendar_date_relative_to_midday() {
        // Midnight of the 11th is 9.5 days after noon on the 1st.
        assert_eq!(days_until_str("2024-06-11", noon()).unwrap(), 10);
        assert_eq!(days_until_str("2024-05-27", noon()).unwrap(), -5);
    }

    #[test]
    fn days_until_str_propagates_parse_errors() {
        assert!(days_until_str("not a date", noon()).is_err());
    }
}
