//! Text for dates and day counts.

use chrono::{DateTime, Utc};
use sitekeeper_config::DateFormat;
use sitekeeper_protocol::{
    Urgency,
    date::{days_until_str, parse_calendar_date},
};

/// Shown in place of a day count whose date does not parse.
pub const INVALID_DATE: &str = "invalid date";

/// Formats a raw date string; unparseable values are shown as they are.
#[must_use]
pub fn display_date(raw: &str, format: DateFormat) -> String {
    parse_calendar_date(raw)
        .map(|date| format.format(date))
        .unwrap_or_else(|_| raw.to_string())
}

/// Formats a day count, e.g. `"14 days"` or `"-1 day"`.
#[must_use]
pub fn days_label(days: i64) -> String {
    match days {
        1 | -1 => format!("{days} day"),
        _ => format!("{days} days"),
    }
}

/// Returns the day count for a raw date, with its urgency, or
/// [`INVALID_DATE`] and `None` when the date does not parse.
#[must_use]
pub fn days_cell(raw: &str, now: DateTime<Utc>) -> (String, Option<Urgency>) {
    match days_until_str(raw, now) {
        Ok(days) => (days_label(days), Some(Urgency::classify(days))),
        Err(_) => (INVALID_DATE.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn dates_follow_format() {
        insta::assert_snapshot!(display_date("2024-01-15", DateFormat::MonthDayYear), @"01/15/2024");
        insta::assert_snapshot!(display_date("2024-01-15T09:30:00Z", DateFormat::Iso), @"2024-01-15");
        insta::assert_snapshot!(display_date("soon", DateFormat::DayMonthYear), @"soon");
    }

    #[test]
    fn day_labels() {
        assert_eq!(days_label(14), "14 days");
        assert_eq!(days_label(1), "1 day");
        assert_eq!(days_label(0), "0 days");
        assert_eq!(days_label(-1), "-1 day");
        assert_eq!(days_label(-5), "-5 days");
    }

    #[test]
    fn day_cells() {
        assert_eq!(
            days_cell("2024-01-15", now()),
            ("14 days".to_string(), Some(Urgency::Urgent))
        );
        assert_eq!(
            days_cell("2024-11-01", now()).1,
            Some(Urgency::Normal)
        );
        assert_eq!(days_cell("2024-13-45", now()), (INVALID_DATE.to_string(), None));
    }
}
