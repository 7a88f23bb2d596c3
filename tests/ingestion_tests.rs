mod common;
use common::{SAMPLE_ROUTE, sample_trip, trip_json, utc, write_trip};
use eldlog::core::session::TripSession;
use eldlog::errors::AppError;
use eldlog::models::trip::parse_instant;
use eldlog::models::{DutyStatus, Trip};

#[test]
fn test_sample_trip_is_accepted() {
    let trip = sample_trip();
    assert_eq!(trip.entries.len(), 9);
    assert_eq!(trip.total_miles, 650.0);
    assert_eq!(trip.estimated_drive_hours, 13.0);
    assert_eq!(trip.route.len(), 7);
    assert_eq!(trip.route[0], [-87.6, 41.9]);
    assert_eq!(trip.entries[0].status, DutyStatus::OffDuty);
    assert_eq!(trip.entries[0].start, utc("2025-01-05T00:00:00Z"));
}

#[test]
fn test_blank_notes_become_absent() {
    let trip = sample_trip();
    // "" on the wire
    assert_eq!(trip.entries[2].note(), None);
    // missing on the wire
    assert_eq!(trip.entries[4].note(), None);
    assert_eq!(trip.entries[3].note(), Some("Fuel stop"));
}

#[test]
fn test_unknown_status_is_rejected() {
    let schedule = r#"[
      { "status": "Driving", "start": "2025-01-05T00:00:00Z", "end": "2025-01-05T01:00:00Z" },
      { "status": "Yard", "start": "2025-01-05T01:00:00Z", "end": "2025-01-05T02:00:00Z" }
    ]"#;
    let err = Trip::from_json(&trip_json(schedule, SAMPLE_ROUTE)).unwrap_err();
    match err {
        AppError::InvalidStatus { index, value } => {
            assert_eq!(index, 1);
            assert_eq!(value, "Yard");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_end_not_after_start_is_rejected() {
    let schedule = r#"[
      { "status": "Driving", "start": "2025-01-05T02:00:00Z", "end": "2025-01-05T02:00:00Z" }
    ]"#;
    let err = Trip::from_json(&trip_json(schedule, SAMPLE_ROUTE)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval { index: 0, .. }));
}

#[test]
fn test_first_violation_is_reported() {
    let schedule = r#"[
      { "status": "Driving", "start": "2025-01-05T03:00:00Z", "end": "2025-01-05T02:00:00Z" },
      { "status": "Nap", "start": "2025-01-05T03:00:00Z", "end": "2025-01-05T04:00:00Z" }
    ]"#;
    let err = Trip::from_json(&trip_json(schedule, SAMPLE_ROUTE)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval { index: 0, .. }));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        Trip::from_json("{ not json"),
        Err(AppError::Json(_))
    ));
    // schedule is required
    assert!(matches!(Trip::from_json("{}"), Err(AppError::Json(_))));
}

#[test]
fn test_missing_route_is_empty() {
    let json = r#"{ "schedule": { "total_miles": 0, "schedule": [] } }"#;
    let trip = Trip::from_json(json).expect("valid");
    assert!(trip.route.is_empty());
    assert!(trip.entries.is_empty());
}

#[test]
fn test_parse_instant_formats() {
    assert_eq!(
        parse_instant("2025-01-05T08:00:00+02:00").expect("rfc3339"),
        utc("2025-01-05T06:00:00Z")
    );
    // offset-less timestamps are UTC
    assert_eq!(
        parse_instant("2025-01-05T08:00:00").expect("naive"),
        utc("2025-01-05T08:00:00Z")
    );
    assert_eq!(
        parse_instant("2025-01-05T08:00:00.250").expect("naive fraction"),
        utc("2025-01-05T08:00:00.250Z")
    );
    assert!(matches!(
        parse_instant("yesterday"),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_session_without_trip_reports_no_data() {
    let session = TripSession::new();
    assert!(!session.is_loaded());
    assert!(matches!(session.trip(), Err(AppError::NoData)));
}

#[test]
fn test_session_load_and_clear() {
    let path = write_trip("session_load", &common::sample_trip_json());

    let mut session = TripSession::new();
    let loaded = session.load_from_path(&path).expect("load").entries.len();
    assert_eq!(loaded, 9);
    assert!(session.is_loaded());

    session.clear();
    assert!(matches!(session.trip(), Err(AppError::NoData)));
}

#[test]
fn test_session_missing_file_is_no_data() {
    let mut session = TripSession::new();
    let err = session
        .load_from_path("/definitely/not/here/trip.json")
        .unwrap_err();
    assert!(matches!(err, AppError::NoData));
}

#[test]
fn test_session_rejects_bad_file_and_keeps_nothing() {
    let path = write_trip("session_bad", "[]");
    let mut session = TripSession::new();
    assert!(session.load_from_path(&path).is_err());
    assert!(!session.is_loaded());
}

#[test]
fn test_session_malformed_response_is_no_data() {
    let mut session = TripSession::new();

    let path = write_trip("session_malformed", "{ not json");
    let err = session.load_from_path(&path).unwrap_err();
    assert!(matches!(err, AppError::NoData));

    let schedule = r#"[
      { "status": "Yard", "start": "2025-01-05T00:00:00Z", "end": "2025-01-05T01:00:00Z" }
    ]"#;
    let path = write_trip("session_bad_status", &trip_json(schedule, "[]"));
    let err = session.load_from_path(&path).unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus { index: 0, .. }));
}
