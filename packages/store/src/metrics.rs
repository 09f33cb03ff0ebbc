//! # Derived display metrics
//!
//! Pure folds over the server-supplied [`WeightRecord`] series. The heavy
//! lifting (BMI, difference, rolling average) already happened in the
//! database view; what is left here is the client-side maths behind the
//! dashboard cards and the trend chart:
//!
//! - [`filter_by_range`] — restrict the series to the selected window.
//! - [`goal_progress`] — percent of the way from the first recorded weight
//!   to the target, clamped to `0..=100`.
//! - [`weekly_trend`] — movement of the one-week rolling average against
//!   the most recent entry at least seven days older.
//! - [`axis_bounds`] / [`chart_points`] / [`BMI_ZONES`] — chart geometry
//!   inputs.
//!
//! Every function expects the series newest-first, the order the weight
//! service returns it in.

use chrono::{Duration, NaiveDate};

use crate::date_range::{format_date, DateRange};
use crate::models::WeightRecord;

/// Keep the entries whose day falls inside the range.
///
/// Comparison happens at date granularity so an entry recorded earlier today
/// is never dropped by an `end` instant of "now".
pub fn filter_by_range(entries: &[WeightRecord], range: &DateRange) -> Vec<WeightRecord> {
    let start = range.start.date_naive();
    let end = range.end.date_naive();
    entries
        .iter()
        .filter(|e| start <= e.created_on && e.created_on <= end)
        .cloned()
        .collect()
}

/// Percent progress from the first recorded weight toward the target.
///
/// `(first - latest) / (first - target) * 100`, rounded and clamped to
/// `0..=100`. When the starting weight already equals the target the ratio
/// degenerates; an entry at the target then counts as complete.
pub fn goal_progress(first: f64, latest: f64, target: f64) -> u8 {
    let ratio = (first - latest) / (first - target);
    if ratio.is_nan() {
        return 100;
    }
    (ratio * 100.0).clamp(0.0, 100.0).round() as u8
}

/// Movement of the one-week rolling average over the last week, one decimal.
///
/// Compares the latest entry's rolling average with that of the most recent
/// entry at least seven days older. `None` while the history is too short
/// or either average is missing.
pub fn weekly_trend(entries: &[WeightRecord]) -> Option<f64> {
    let latest = entries.first()?;
    let latest_avg = latest.one_week_average?;
    let cutoff = latest.created_on - Duration::days(7);
    let baseline = entries.iter().find(|e| e.created_on <= cutoff)?;
    let baseline_avg = baseline.one_week_average?;
    Some(((latest_avg - baseline_avg) * 10.0).round() / 10.0)
}

/// Chart axis bounds: floor/ceil of the observed extremes padded by 0.5.
///
/// Computed independently per axis (weight and BMI each get their own call).
pub fn axis_bounds<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some((min.floor() - 0.5, max.ceil() + 0.5))
}

/// One plotted sample of the trend chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Formatted date label for the tooltip and x axis.
    pub label: String,
    /// Days since the Unix epoch, the x value.
    pub day: i64,
    pub weight: f64,
    pub week_average: Option<f64>,
    pub bmi: Option<f64>,
}

/// Range-filtered entries in ascending date order, ready for plotting.
pub fn chart_points(entries: &[WeightRecord], range: &DateRange) -> Vec<ChartPoint> {
    let mut filtered = filter_by_range(entries, range);
    filtered.sort_by_key(|e| (e.created_on, e.id));
    filtered
        .into_iter()
        .map(|e| ChartPoint {
            label: format_date(e.created_on),
            day: (e.created_on - NaiveDate::default()).num_days(),
            weight: e.weight,
            week_average: e.one_week_average,
            bmi: e.bmi,
        })
        .collect()
}

/// A shaded band behind the BMI axis of the trend chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiZone {
    pub from: f64,
    pub to: f64,
    pub fill: &'static str,
    pub opacity: f64,
    pub label: &'static str,
}

pub const BMI_ZONES: [BmiZone; 4] = [
    BmiZone { from: 0.0, to: 18.5, fill: "#90caf9", opacity: 0.2, label: "Underweight" },
    BmiZone { from: 18.5, to: 24.9, fill: "#81c784", opacity: 0.2, label: "Normal" },
    BmiZone { from: 24.9, to: 29.9, fill: "#fff176", opacity: 0.2, label: "Overweight" },
    BmiZone { from: 29.9, to: 100.0, fill: "#ef9a9a", opacity: 0.2, label: "Obese" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::days_to_range_at;
    use chrono::{DateTime, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 9, 0, 0).unwrap()
    }

    fn entry(id: i64, date: &str, weight: f64, week_avg: Option<f64>) -> WeightRecord {
        WeightRecord {
            id,
            weight,
            created_on: date.parse().expect("test date"),
            bmi: Some(weight / (1.8 * 1.8)),
            bmi_category: None,
            category_description: None,
            difference: None,
            one_week_average: week_avg,
        }
    }

    // Newest-first, like the service returns them.
    fn series() -> Vec<WeightRecord> {
        vec![
            entry(4, "2026-08-06", 81.0, Some(81.4)),
            entry(3, "2026-08-03", 81.6, Some(81.9)),
            entry(2, "2026-07-28", 82.4, Some(82.6)),
            entry(1, "2026-07-20", 83.0, Some(83.0)),
        ]
    }

    #[test]
    fn all_time_filter_keeps_the_series_unchanged() {
        let entries = series();
        let all = days_to_range_at(now(), 0);
        assert_eq!(filter_by_range(&entries, &all), entries);
    }

    #[test]
    fn filter_drops_entries_outside_the_window() {
        let entries = series();
        let week = days_to_range_at(now(), 7);
        let kept = filter_by_range(&entries, &week);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|e| e.created_on >= "2026-07-30".parse().unwrap()));
    }

    #[test]
    fn goal_progress_is_clamped_to_percent_bounds() {
        // Halfway from 90 to 80.
        assert_eq!(goal_progress(90.0, 85.0, 80.0), 50);
        // Overshot the target.
        assert_eq!(goal_progress(90.0, 78.0, 80.0), 100);
        // Moved away from the target.
        assert_eq!(goal_progress(90.0, 93.0, 80.0), 0);
        // Rounded, not truncated.
        assert_eq!(goal_progress(90.0, 85.1, 80.0), 49);
    }

    #[test]
    fn goal_progress_survives_a_degenerate_target() {
        // Target equals the starting weight: at or past it is complete.
        assert_eq!(goal_progress(80.0, 80.0, 80.0), 100);
        assert_eq!(goal_progress(80.0, 79.0, 80.0), 100);
        assert_eq!(goal_progress(80.0, 81.0, 80.0), 0);
    }

    #[test]
    fn weekly_trend_compares_against_a_week_old_average() {
        // Latest avg 81.4 vs 82.6 from 2026-07-28 (9 days older).
        let trend = weekly_trend(&series());
        assert_eq!(trend, Some(-1.2));
    }

    #[test]
    fn weekly_trend_accepts_an_entry_exactly_seven_days_old() {
        let entries = vec![
            entry(2, "2026-08-06", 81.0, Some(81.0)),
            entry(1, "2026-07-30", 82.0, Some(82.0)),
        ];
        assert_eq!(weekly_trend(&entries), Some(-1.0));
    }

    #[test]
    fn weekly_trend_needs_enough_history() {
        assert_eq!(weekly_trend(&[]), None);

        let recent_only = vec![
            entry(2, "2026-08-06", 81.0, Some(81.0)),
            entry(1, "2026-08-02", 82.0, Some(82.0)),
        ];
        assert_eq!(weekly_trend(&recent_only), None);

        // Old enough entry but no rolling average on it.
        let no_avg = vec![
            entry(2, "2026-08-06", 81.0, Some(81.0)),
            entry(1, "2026-07-20", 82.0, None),
        ];
        assert_eq!(weekly_trend(&no_avg), None);
    }

    #[test]
    fn axis_bounds_pad_the_observed_extremes() {
        assert_eq!(axis_bounds([81.2, 83.7, 82.0]), Some((80.5, 84.5)));
        assert_eq!(axis_bounds([80.0]), Some((79.5, 80.5)));
        assert_eq!(axis_bounds(std::iter::empty()), None);
    }

    #[test]
    fn chart_points_come_out_oldest_first() {
        let points = chart_points(&series(), &days_to_range_at(now(), 0));
        assert_eq!(points.len(), 4);
        assert!(points.windows(2).all(|w| w[0].day < w[1].day));
        assert_eq!(points[0].label, "20 Jul 2026");
        assert_eq!(points[3].weight, 81.0);
    }
}
