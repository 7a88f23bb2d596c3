mod common;
use common::sample_trip;
use eldlog::core::grouping::group_by_day;
use eldlog::core::zone::ViewerZone;
use eldlog::render::{GridGeometry, LogView, Point};

fn first_day_view() -> LogView {
    let buckets = group_by_day(&sample_trip().entries, &ViewerZone::Utc);
    LogView::new(&buckets[0], &ViewerZone::Utc, GridGeometry::new(900.0, 280.0, 50.0))
        .expect("view")
}

#[test]
fn test_markers_carry_notes() {
    let view = first_day_view();
    let notes: Vec<&str> = view.markers().iter().map(|m| m.note.as_str()).collect();
    assert_eq!(
        notes,
        vec!["Start of day", "Pre-trip inspection", "Fuel stop", "10-hour break"]
    );
    assert_eq!(view.markers()[0].center, Point::new(50.0, 72.5));
}

#[test]
fn test_hit_test_radius_is_inclusive() {
    let view = first_day_view();

    let hit = view.hit_test(Point::new(60.0, 72.5)).expect("hit at radius");
    assert_eq!(hit.note, "Start of day");

    assert!(view.hit_test(Point::new(60.0001, 72.5)).is_none());
}

#[test]
fn test_hover_scales_display_coordinates() {
    let view = first_day_view();

    // chart shown at half size
    let tip = view
        .hover(Point::new(30.0, 36.25), (450.0, 140.0))
        .expect("tooltip");
    assert_eq!(tip.note, "Start of day");
    assert_eq!((tip.x, tip.y), (30.0, 36.25));

    // same logical distance as 10.0001 units away
    assert!(view.hover(Point::new(30.00005, 36.25), (450.0, 140.0)).is_none());
}

#[test]
fn test_hover_outside_markers_clears_tooltip() {
    let view = first_day_view();
    assert!(view.hover(Point::new(700.0, 20.0), (900.0, 280.0)).is_none());
}

#[test]
fn test_custom_hover_radius() {
    let view = first_day_view().with_hover_radius(20.0);
    assert!(view.hit_test(Point::new(65.0, 72.5)).is_some());
}

#[test]
fn test_svg_chart_content() {
    let svg = first_day_view().to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("Driver Log - Jan 5, 2025"));
    assert!(svg.contains("<title>Fuel stop</title>"));
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("12 AM"));
    assert!(svg.contains("On Duty"));
    // sleeper period continues into the next day
    assert!(svg.contains("<polygon"));
}

#[test]
fn test_svg_escapes_notes() {
    use eldlog::models::{DayBucket, DutyStatus, ScheduleEntry};

    let mut bucket = DayBucket::new(chrono::NaiveDate::from_ymd_opt(2025, 1, 5).expect("date"));
    bucket.entries.push(
        ScheduleEntry::new(
            DutyStatus::Driving,
            common::utc("2025-01-05T01:00:00Z"),
            common::utc("2025-01-05T02:00:00Z"),
        )
        .with_note("Tolls <$5> & \"snacks\""),
    );
    let view = LogView::new(&bucket, &ViewerZone::Utc, GridGeometry::new(900.0, 280.0, 50.0))
        .expect("view");
    let svg = view.to_svg();
    assert!(svg.contains("Tolls &lt;$5&gt; &amp; &quot;snacks&quot;"));
}
