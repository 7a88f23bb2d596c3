// src/export/model.rs

use crate::core::summary::{StatusTotals, format_duration, format_hhmm};
use crate::core::zone::ViewerZone;
use crate::models::day_bucket::DayBucket;
use crate::models::duty_status::DutyStatus;
use crate::models::schedule_entry::ScheduleEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the PDF exporter needs for one page.
#[derive(Debug, Clone)]
pub struct ExportDay {
    /// Pre-formatted "DD/MM/YYYY".
    pub date: String,
    pub total_miles: f64,
    pub midnight: DateTime<Utc>,
    pub entries: Vec<ScheduleEntry>,
}

/// One day of the JSON summary export.
#[derive(Serialize, Clone, Debug)]
pub struct DaySummaryRecord {
    pub date: String,
    pub label: String,
    pub total_miles: f64,
    pub entries: usize,
    pub off_duty: String,
    pub sleeper: String,
    pub driving: String,
    pub on_duty: String,
    pub hours: StatusTotals,
}

impl DaySummaryRecord {
    pub fn new(bucket: &DayBucket, total_miles: f64) -> Self {
        let totals = StatusTotals::from_entries(&bucket.entries);
        Self {
            date: bucket.date.format("%Y-%m-%d").to_string(),
            label: bucket.label(),
            total_miles,
            entries: bucket.entries.len(),
            off_duty: totals.formatted(DutyStatus::OffDuty),
            sleeper: totals.formatted(DutyStatus::Sleeper),
            driving: totals.formatted(DutyStatus::Driving),
            on_duty: totals.formatted(DutyStatus::OnDutyNotDriving),
            hours: totals,
        }
    }
}

/// Flat timeline row for CSV.
#[derive(Serialize, Clone, Debug)]
pub struct TimelineRow {
    pub day: String,
    pub status: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub hours: String,
    pub miles_since_start: f64,
    pub note: String,
}

impl TimelineRow {
    pub fn new(day: &str, entry: &ScheduleEntry, zone: &ViewerZone) -> Self {
        let fmt = |t: DateTime<Utc>| {
            zone.local_datetime(t)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        };
        Self {
            day: day.to_string(),
            status: entry.status.as_str().to_string(),
            start: fmt(entry.start),
            end: fmt(entry.end),
            duration: format_duration(entry.start, entry.end),
            hours: format_hhmm(entry.duration_hours()),
            miles_since_start: entry.miles_since_start,
            note: entry.note().unwrap_or_default().to_string(),
        }
    }
}
