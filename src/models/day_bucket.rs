use crate::core::zone::ViewerZone;
use crate::errors::AppResult;
use crate::models::schedule_entry::ScheduleEntry;
use chrono::{DateTime, NaiveDate, Utc};

/// Entries whose start falls on one calendar date, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub entries: Vec<ScheduleEntry>,
}

impl DayBucket {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    /// Display label, e.g. "Jan 5, 2025".
    pub fn label(&self) -> String {
        day_label(self.date)
    }

    /// Date as printed on the exported log page, e.g. "05/01/2025".
    pub fn export_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Start of the 24-hour window this day's chart represents.
    pub fn reference_midnight(&self, zone: &ViewerZone) -> AppResult<DateTime<Utc>> {
        zone.midnight(self.date)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
