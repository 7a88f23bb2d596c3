mod common;
use common::{sample_trip, utc};
use eldlog::core::grouping::{daily_miles, find_day, group_by_day};
use eldlog::core::summary::{
    StatusTotals, TripOverview, format_drive_time, format_duration, format_hhmm,
};
use eldlog::core::zone::ViewerZone;
use eldlog::models::{DayBucket, DutyStatus, ScheduleEntry};

#[test]
fn test_group_by_start_date() {
    let trip = sample_trip();
    let buckets = group_by_day(&trip.entries, &ViewerZone::Utc);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].label(), "Jan 5, 2025");
    assert_eq!(buckets[1].label(), "Jan 6, 2025");
    assert_eq!(buckets[0].entries.len(), 6);
    assert_eq!(buckets[1].entries.len(), 3);

    // the sleeper period crossing midnight stays with its start date
    assert_eq!(buckets[0].entries[5].status, DutyStatus::Sleeper);
}

#[test]
fn test_grouping_neither_drops_nor_duplicates() {
    let trip = sample_trip();
    let buckets = group_by_day(&trip.entries, &ViewerZone::Utc);
    let flattened: Vec<ScheduleEntry> = buckets.into_iter().flat_map(|b| b.entries).collect();
    assert_eq!(flattened, trip.entries);
}

#[test]
fn test_grouping_keeps_source_order_within_a_day() {
    let mut entries = sample_trip().entries;
    entries.swap(1, 3);
    let buckets = group_by_day(&entries, &ViewerZone::Utc);
    assert_eq!(buckets[0].entries[1].note(), Some("Fuel stop"));
    assert_eq!(buckets[0].entries[3].note(), Some("Pre-trip inspection"));
}

#[test]
fn test_buckets_come_out_in_date_order() {
    let mut entries = sample_trip().entries;
    entries.reverse();
    let buckets = group_by_day(&entries, &ViewerZone::Utc);
    assert_eq!(buckets[0].label(), "Jan 5, 2025");
    assert_eq!(buckets[1].label(), "Jan 6, 2025");
}

#[test]
fn test_grouping_uses_viewer_calendar() {
    let trip = sample_trip();
    let zone = ViewerZone::parse("-05:00").expect("offset");
    let buckets = group_by_day(&trip.entries, &zone);

    // 00:00Z on Jan 5 is still Jan 4 at -05:00, 01:30Z on Jan 6 still Jan 5
    let sizes: Vec<(String, usize)> = buckets
        .iter()
        .map(|b| (b.label(), b.entries.len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("Jan 4, 2025".to_string(), 1),
            ("Jan 5, 2025".to_string(), 6),
            ("Jan 6, 2025".to_string(), 2),
        ]
    );
}

#[test]
fn test_empty_input_yields_no_buckets() {
    assert!(group_by_day(&[], &ViewerZone::Utc).is_empty());
}

#[test]
fn test_daily_miles_are_deltas() {
    let trip = sample_trip();
    let buckets = group_by_day(&trip.entries, &ViewerZone::Utc);
    assert_eq!(daily_miles(&buckets), vec![400.0, 250.0]);
}

#[test]
fn test_daily_miles_empty_bucket_is_zero() {
    let mut buckets = group_by_day(&sample_trip().entries, &ViewerZone::Utc);
    let empty = DayBucket::new(buckets[1].date.succ_opt().expect("next day"));
    buckets.insert(1, empty);
    assert_eq!(daily_miles(&buckets), vec![400.0, 0.0, 250.0]);
}

#[test]
fn test_find_day_by_index_label_or_date() {
    let buckets = group_by_day(&sample_trip().entries, &ViewerZone::Utc);

    assert_eq!(find_day(&buckets, "1").map(|b| b.label()), Some("Jan 5, 2025".into()));
    assert_eq!(find_day(&buckets, "jan 6, 2025").map(|b| b.label()), Some("Jan 6, 2025".into()));
    assert_eq!(find_day(&buckets, "2025-01-06").map(|b| b.label()), Some("Jan 6, 2025".into()));
    assert!(find_day(&buckets, "0").is_none());
    assert!(find_day(&buckets, "3").is_none());
    assert!(find_day(&buckets, "Feb 1, 2025").is_none());
}

#[test]
fn test_status_totals_per_day() {
    let buckets = group_by_day(&sample_trip().entries, &ViewerZone::Utc);

    let day1 = StatusTotals::from_entries(&buckets[0].entries);
    assert_eq!(day1.formatted(DutyStatus::OffDuty), "06:00");
    assert_eq!(day1.formatted(DutyStatus::Sleeper), "10:00");
    assert_eq!(day1.formatted(DutyStatus::Driving), "08:00");
    assert_eq!(day1.formatted(DutyStatus::OnDutyNotDriving), "01:30");
    assert_eq!(day1.total(), 25.5);

    let day2 = StatusTotals::from_entries(&buckets[1].entries);
    assert_eq!(day2.formatted(DutyStatus::Sleeper), "00:00");
    assert_eq!(day2.formatted(DutyStatus::Driving), "05:00");
    assert_eq!(day2.formatted(DutyStatus::OffDuty), "01:30");
}

#[test]
fn test_format_hhmm() {
    assert_eq!(format_hhmm(0.0), "00:00");
    assert_eq!(format_hhmm(8.0), "08:00");
    assert_eq!(format_hhmm(0.75), "00:45");
    assert_eq!(format_hhmm(10.5), "10:30");
    // 59.994 minutes rounds up and carries into the hour
    assert_eq!(format_hhmm(7.9999), "08:00");
}

#[test]
fn test_format_drive_time_and_duration() {
    assert_eq!(format_drive_time(13.25), "13h15min");
    assert_eq!(format_drive_time(0.5), "00h30min");

    let start = utc("2025-01-05T06:00:00Z");
    assert_eq!(format_duration(start, utc("2025-01-05T14:00:00Z")), "8h");
    assert_eq!(format_duration(start, utc("2025-01-05T06:45:00Z")), "45m");
    assert_eq!(format_duration(start, utc("2025-01-05T08:30:00Z")), "2h 30m");
}

#[test]
fn test_trip_overview() {
    let trip = sample_trip();
    let overview = TripOverview::from_trip(&trip, &ViewerZone::Utc);
    assert_eq!(overview.total_miles, 650.0);
    assert_eq!(overview.estimated_drive_hours, 13.0);
    assert_eq!(overview.total_days, 2);
    assert_eq!(overview.days_label(), "2 days");
}

#[test]
fn test_viewer_zone_parsing() {
    assert_eq!(ViewerZone::parse("utc").expect("utc"), ViewerZone::Utc);
    assert_eq!(ViewerZone::parse("Local").expect("local"), ViewerZone::Local);
    assert!(matches!(ViewerZone::parse("+02:00"), Ok(ViewerZone::Fixed(_))));
    assert!(matches!(ViewerZone::parse("-0530"), Ok(ViewerZone::Fixed(_))));
    assert!(ViewerZone::parse("Mars/Olympus").is_err());
    assert!(ViewerZone::parse("+25:00").is_err());
}

#[test]
fn test_reference_midnight_in_fixed_zone() {
    let zone = ViewerZone::parse("+02:00").expect("offset");
    let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 5).expect("date");
    assert_eq!(zone.midnight(date).expect("midnight"), utc("2025-01-04T22:00:00Z"));
    assert_eq!(
        ViewerZone::Utc.midnight(date).expect("midnight"),
        utc("2025-01-05T00:00:00Z")
    );
}
