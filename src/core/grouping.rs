//! Partition a flat schedule into per-calendar-day buckets.

use crate::core::zone::ViewerZone;
use crate::models::day_bucket::DayBucket;
use crate::models::schedule_entry::ScheduleEntry;
use std::collections::BTreeMap;

/// Group entries by the viewer-local date of their `start`.
///
/// Buckets come out in ascending date order, whatever the input order;
/// within a bucket entries keep their source order. An entry crossing
/// midnight belongs to its start date only.
pub fn group_by_day(entries: &[ScheduleEntry], zone: &ViewerZone) -> Vec<DayBucket> {
    let mut days: BTreeMap<_, DayBucket> = BTreeMap::new();

    for entry in entries {
        let date = zone.local_date(entry.start);
        days.entry(date)
            .or_insert_with(|| DayBucket::new(date))
            .entries
            .push(entry.clone());
    }

    days.into_values().collect()
}

/// Miles traveled during each bucket: the delta of the cumulative
/// `miles_since_start` of the bucket's last entry against the running total
/// of the previous buckets. An empty bucket traveled 0 miles.
pub fn daily_miles(buckets: &[DayBucket]) -> Vec<f64> {
    let mut previous = 0.0;

    buckets
        .iter()
        .map(|bucket| match bucket.entries.last() {
            Some(last) => {
                let miles = last.miles_since_start - previous;
                previous += miles;
                miles
            }
            None => 0.0,
        })
        .collect()
}

/// Find a bucket either by 1-based position or by its label / ISO date.
pub fn find_day<'a>(buckets: &'a [DayBucket], key: &str) -> Option<&'a DayBucket> {
    if let Ok(n) = key.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| buckets.get(i));
    }

    buckets
        .iter()
        .find(|b| b.label().eq_ignore_ascii_case(key) || b.date.format("%Y-%m-%d").to_string() == key)
}
