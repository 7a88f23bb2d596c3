use crate::models::duty_status::DutyStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One contiguous duty-status interval, validated at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEntry {
    pub status: DutyStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub note: Option<String>,
    pub miles_since_start: f64,
}

impl ScheduleEntry {
    pub fn new(status: DutyStatus, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            status,
            start,
            end,
            note: None,
            miles_since_start: 0.0,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = normalize_note(note);
        self
    }

    pub fn with_miles(mut self, miles: f64) -> Self {
        self.miles_since_start = miles;
        self
    }

    /// Unclipped duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Blank or whitespace-only notes are treated as absent.
pub fn normalize_note(note: &str) -> Option<String> {
    if note.trim().is_empty() {
        None
    } else {
        Some(note.to_string())
    }
}
