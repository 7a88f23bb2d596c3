#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use eldlog::models::Trip;
use std::env;
use std::fs;
use std::path::PathBuf;

/// eldlog binary with an isolated home directory (no user config).
pub fn eld(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("eldlog");
    cmd.env("HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_eldlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    if PathBuf::from(&p).is_dir() {
        fs::remove_dir_all(&p).ok();
    } else {
        fs::remove_file(&p).ok();
    }
    p
}

/// Write `json` to a fresh temp file and return its path
pub fn write_trip(name: &str, json: &str) -> String {
    let path = temp_out(name, "json");
    fs::write(&path, json).expect("write trip file");
    path
}

pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid test timestamp")
        .with_timezone(&Utc)
}

pub fn sample_trip() -> Trip {
    Trip::from_json(&sample_trip_json()).expect("sample trip is valid")
}

/// Two days (Jan 5 and Jan 6, 2025, UTC) with a sleeper period crossing
/// midnight.
pub fn sample_trip_json() -> String {
    trip_json(SAMPLE_SCHEDULE, SAMPLE_ROUTE)
}

pub fn trip_json(schedule: &str, coordinates: &str) -> String {
    format!(
        r#"{{
  "summary": {{ "distance_km": 1046.0, "duration_hr": 13.0 }},
  "route": {{
    "features": [
      {{ "geometry": {{ "type": "LineString", "coordinates": {coordinates} }} }}
    ]
  }},
  "schedule": {{
    "total_miles": 650,
    "estimated_drive_hours": 13.0,
    "schedule": {schedule}
  }}
}}"#
    )
}

pub const SAMPLE_ROUTE: &str = r#"[
  [-87.6, 41.9], [-88.0, 41.5], [-89.0, 40.8], [-90.2, 39.6],
  [-91.0, 38.9], [-92.3, 38.6], [-94.6, 39.1]
]"#;

pub const SAMPLE_SCHEDULE: &str = r#"[
  { "status": "OffDuty", "start": "2025-01-05T00:00:00Z", "end": "2025-01-05T06:00:00Z",
    "note": "Start of day", "miles_since_start": 0 },
  { "status": "OnDutyNotDriving", "start": "2025-01-05T06:00:00Z", "end": "2025-01-05T07:00:00Z",
    "note": "Pre-trip inspection", "miles_since_start": 0 },
  { "status": "Driving", "start": "2025-01-05T07:00:00Z", "end": "2025-01-05T12:00:00Z",
    "note": "", "miles_since_start": 250 },
  { "status": "OnDutyNotDriving", "start": "2025-01-05T12:00:00Z", "end": "2025-01-05T12:30:00Z",
    "note": "Fuel stop", "miles_since_start": 250 },
  { "status": "Driving", "start": "2025-01-05T12:30:00Z", "end": "2025-01-05T15:30:00Z",
    "miles_since_start": 400 },
  { "status": "Sleeper", "start": "2025-01-05T15:30:00Z", "end": "2025-01-06T01:30:00Z",
    "note": "10-hour break", "miles_since_start": 400 },
  { "status": "Driving", "start": "2025-01-06T01:30:00Z", "end": "2025-01-06T06:30:00Z",
    "miles_since_start": 650 },
  { "status": "OnDutyNotDriving", "start": "2025-01-06T06:30:00Z", "end": "2025-01-06T07:30:00Z",
    "note": "Drop-off", "miles_since_start": 650 },
  { "status": "OffDuty", "start": "2025-01-06T07:30:00Z", "end": "2025-01-06T09:00:00Z",
    "miles_since_start": 650 }
]"#;
