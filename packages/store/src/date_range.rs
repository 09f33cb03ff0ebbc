//! # Date-range arithmetic for the trend chart filter
//!
//! The chart filter is persisted as a relative day count and materialised
//! into a concrete `{start, end}` window against the current instant:
//!
//! - `days == 0` means "all time" and anchors the start at the Unix epoch.
//! - any other count puts the start exactly `days * 24h` before the end.
//!
//! The inverse mapping ([`range_to_days`]) rounds the millisecond span back
//! to whole days, so day-count -> range -> day-count is the identity for
//! non-zero inputs. [`time_until_midnight`] gives the delay after which a
//! persisted range must be re-derived so "last 7 days" tracks the local
//! calendar day.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// An inclusive time window over the weight series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// The window covering everything ever recorded, ending now.
    pub fn all_time() -> Self {
        days_to_range(0)
    }

    /// Whether the start is anchored at the epoch, i.e. "all time".
    pub fn is_all_time(&self) -> bool {
        self.start == DateTime::UNIX_EPOCH
    }
}

/// Materialise a relative day count into a concrete range ending now.
pub fn days_to_range(days: i64) -> DateRange {
    days_to_range_at(Utc::now(), days)
}

pub fn days_to_range_at(now: DateTime<Utc>, days: i64) -> DateRange {
    let start = if days == 0 {
        DateTime::UNIX_EPOCH
    } else {
        now - Duration::days(days)
    };
    DateRange { start, end: now }
}

/// Collapse a range back to the day count it was derived from.
///
/// An epoch-anchored start maps to `0`; otherwise the span rounds to whole
/// days, which absorbs the sub-second drift picked up between derivation
/// and persistence.
pub fn range_to_days(range: &DateRange) -> i64 {
    if range.is_all_time() {
        return 0;
    }
    let span = range.end - range.start;
    (span.num_milliseconds() as f64 / MILLIS_PER_DAY).round() as i64
}

/// Time left until the next local midnight.
pub fn time_until_midnight() -> Duration {
    time_until_midnight_at(Local::now())
}

pub fn time_until_midnight_at(now: DateTime<Local>) -> Duration {
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return Duration::zero();
    };
    tomorrow.and_time(NaiveTime::MIN) - now.naive_local()
}

/// Entry dates as the UI shows them: "05 Aug 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 0).unwrap()
    }

    #[test]
    fn day_count_round_trips_for_non_zero_inputs() {
        for days in [1, 7, 30, 90, 365] {
            let range = days_to_range_at(now(), days);
            assert_eq!(range_to_days(&range), days);
        }
    }

    #[test]
    fn zero_days_means_all_time() {
        let range = days_to_range_at(now(), 0);
        assert_eq!(range.start, DateTime::UNIX_EPOCH);
        assert_eq!(range.end, now());
        assert!(range.is_all_time());
        assert_eq!(range_to_days(&range), 0);
    }

    #[test]
    fn fractional_spans_round_to_whole_days() {
        // A custom 36h window rounds up to 2 days.
        let range = DateRange {
            start: now() - Duration::hours(36),
            end: now(),
        };
        assert_eq!(range_to_days(&range), 2);

        let range = DateRange {
            start: now() - Duration::hours(11),
            end: now(),
        };
        assert_eq!(range_to_days(&range), 0);
    }

    #[test]
    fn midnight_timeout_reaches_the_next_day() {
        let late = Local.with_ymd_and_hms(2026, 8, 6, 22, 15, 0).unwrap();
        assert_eq!(
            time_until_midnight_at(late),
            Duration::hours(1) + Duration::minutes(45)
        );

        let early = Local.with_ymd_and_hms(2026, 8, 6, 0, 0, 1).unwrap();
        let wait = time_until_midnight_at(early);
        assert!(wait > Duration::zero());
        assert!(wait <= Duration::days(1));
    }

    #[test]
    fn dates_format_like_the_ui() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_date(date), "06 Aug 2026");
    }
}
