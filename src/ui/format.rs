//! Timestamp formatting shared by the list and detail panes.
//!
//! The list pane abbreviates aggressively (time for today, day + month
//! otherwise); the detail pane always shows the full date and time. Both
//! take the reference instant as a parameter where it matters so tests can
//! pin the clock.

use chrono::{DateTime, Utc};

/// Formats a timestamp for a list row.
///
/// Same calendar day as `now` renders time-only ("08:30"); anything else
/// renders day and abbreviated month ("30 May").
pub fn list_timestamp(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if date.date_naive() == now.date_naive() {
        date.format("%H:%M").to_string()
    } else {
        date.format("%-d %b").to_string()
    }
}

/// Formats a timestamp for the detail header ("30 May 2024 08:30").
pub fn detail_timestamp(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn list_shows_time_for_today() {
        let now = instant(2024, 6, 1, 10, 0);
        assert_eq!(list_timestamp(instant(2024, 6, 1, 8, 30), now), "08:30");
    }

    #[test]
    fn list_shows_day_and_month_for_other_days() {
        let now = instant(2024, 6, 1, 10, 0);
        assert_eq!(list_timestamp(instant(2024, 5, 30, 8, 30), now), "30 May");
    }

    #[test]
    fn list_does_not_match_same_day_of_other_months() {
        let now = instant(2024, 6, 1, 10, 0);
        assert_eq!(list_timestamp(instant(2024, 5, 1, 9, 15), now), "1 May");
    }

    #[test]
    fn detail_shows_full_date_and_time() {
        assert_eq!(
            detail_timestamp(instant(2024, 5, 30, 8, 30)),
            "30 May 2024 08:30"
        );
    }

    #[test]
    fn times_are_zero_padded() {
        let now = instant(2024, 6, 1, 10, 0);
        assert_eq!(list_timestamp(instant(2024, 6, 1, 7, 5), now), "07:05");
        assert_eq!(
            detail_timestamp(instant(2024, 12, 9, 23, 7)),
            "9 Dec 2024 23:07"
        );
    }
}
