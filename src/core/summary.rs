//! Per-status duration totals and trip-level figures.

use crate::core::grouping::group_by_day;
use crate::core::zone::ViewerZone;
use crate::models::duty_status::DutyStatus;
use crate::models::schedule_entry::ScheduleEntry;
use crate::models::trip::Trip;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Accumulated hours per status, indexed by chart row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusTotals {
    hours: [f64; 4],
}

impl StatusTotals {
    /// Sum the unclipped duration of every entry. A Sleeper period crossing
    /// midnight counts fully toward the day it started on.
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            totals.hours[entry.status.row_index()] += entry.duration_hours();
        }
        totals
    }

    pub fn get(&self, status: DutyStatus) -> f64 {
        self.hours[status.row_index()]
    }

    /// `(status, hours)` in fixed row order.
    pub fn iter(&self) -> impl Iterator<Item = (DutyStatus, f64)> + '_ {
        DutyStatus::ALL.iter().map(|s| (*s, self.get(*s)))
    }

    pub fn total(&self) -> f64 {
        self.hours.iter().sum()
    }

    pub fn formatted(&self, status: DutyStatus) -> String {
        format_hhmm(self.get(status))
    }
}

/// Fractional hours → `HH:MM` (floor hours, rounded remainder minutes).
/// A remainder that rounds up to 60 carries into the hour.
pub fn format_hhmm(hours: f64) -> String {
    let (h, m) = split_hours(hours);
    format!("{:02}:{:02}", h, m)
}

/// Fractional hours → `HHhMMmin`, as shown on the trip summary card.
pub fn format_drive_time(hours: f64) -> String {
    let (h, m) = split_hours(hours);
    format!("{:02}h{:02}min", h, m)
}

fn split_hours(hours: f64) -> (i64, i64) {
    let hours = hours.max(0.0);
    let mut h = hours.floor() as i64;
    let mut m = ((hours - hours.floor()) * 60.0).round() as i64;
    if m >= 60 {
        h += 1;
        m -= 60;
    }
    (h, m)
}

/// Human readable interval length for the timeline table: `8h`, `45m`,
/// `2h 30m`. Minutes are truncated.
pub fn format_duration(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let total_minutes = (end - start).num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours == 0 {
        format!("{minutes}m")
    } else if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}

/// Figures shown on the trip summary card.
#[derive(Debug, Clone, Serialize)]
pub struct TripOverview {
    pub total_miles: f64,
    pub estimated_drive_hours: f64,
    pub total_days: usize,
}

impl TripOverview {
    pub fn from_trip(trip: &Trip, zone: &ViewerZone) -> Self {
        Self {
            total_miles: trip.total_miles,
            estimated_drive_hours: trip.estimated_drive_hours,
            total_days: group_by_day(&trip.entries, zone).len(),
        }
    }

    pub fn days_label(&self) -> String {
        if self.total_days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", self.total_days)
        }
    }
}
