// Chronological normalization of raw time series points
use super::telemetry::TimeSeriesPoint;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp::Ordering;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse a point's time label into a sortable timestamp.
///
/// Time-only labels ("14:30") are anchored to 1970-01-01 so they order
/// within a single day. Month labels ("2024-03") map to the first of the month.
pub fn parse_point_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(time);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
        .map(|time| epoch.and_time(time))
}

/// Sort points ascending by parsed time without touching the input.
///
/// The sort is stable, so equal timestamps keep their encounter order.
/// Points whose time does not parse are kept and placed after every
/// parsable point, also in encounter order.
pub fn normalize_points(points: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &TimeSeriesPoint)> = points
        .iter()
        .map(|p| (parse_point_time(&p.time), p))
        .collect();

    let unparsable = keyed.iter().filter(|(key, _)| key.is_none()).count();
    if unparsable > 0 {
        tracing::debug!(
            "{} of {} points have unparsable times, ordering them last",
            unparsable,
            points.len()
        );
    }

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}
