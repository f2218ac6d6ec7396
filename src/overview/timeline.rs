// Timeline merger: union per-provider daily series into one ascending,
// calendar-aligned sequence. Same-day writes from different providers land
// in different fields and never clobber each other.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DailyCost, ProviderKind, TimelinePoint};

/// Display window: the merged timeline keeps the most recent entries only.
pub const TIMELINE_WINDOW: usize = 30;

/// Merges up to three independent date-keyed series. Each provider's list
/// is pre-aggregated (one entry per day); an empty list contributes
/// nothing. Output is sorted ascending by day with one entry per day.
pub fn merge_timelines(series: &[(ProviderKind, &[DailyCost])]) -> Vec<TimelinePoint> {
    let mut by_day: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();
    for (provider, points) in series {
        for point in *points {
            let entry = by_day
                .entry(point.day)
                .or_insert_with(|| TimelinePoint::new(point.day));
            match provider {
                ProviderKind::Aws => entry.aws = Some(point.amount),
                ProviderKind::Azure => entry.azure = Some(point.amount),
                ProviderKind::Gcp => entry.gcp = Some(point.amount),
            }
        }
    }
    by_day.into_values().collect()
}

/// Keeps the most recent `window` entries of an ascending timeline.
pub fn truncate_to_window(mut points: Vec<TimelinePoint>, window: usize) -> Vec<TimelinePoint> {
    if points.len() > window {
        points.split_off(points.len() - window)
    } else {
        points
    }
}
