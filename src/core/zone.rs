//! Viewer calendar: which timezone decides what "a day" is.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerZone {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl ViewerZone {
    /// Accepts `local`, `utc` (or `z`) and fixed offsets like `+02:00`,
    /// `-0530`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "local" => return Ok(ViewerZone::Local),
            "utc" | "z" => return Ok(ViewerZone::Utc),
            _ => {}
        }

        let re = Regex::new(r"^([+-])(\d{2}):?(\d{2})$")
            .map_err(|e| AppError::Other(e.to_string()))?;
        let caps = re
            .captures(s)
            .ok_or_else(|| AppError::InvalidTimezone(s.to_string()))?;

        let hours: i32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
        let minutes: i32 = caps[3]
            .parse()
            .map_err(|_| AppError::InvalidTimezone(s.to_string()))?;
        let mut secs = hours * 3600 + minutes * 60;
        if &caps[1] == "-" {
            secs = -secs;
        }

        FixedOffset::east_opt(secs)
            .map(ViewerZone::Fixed)
            .ok_or_else(|| AppError::InvalidTimezone(s.to_string()))
    }

    /// Wall-clock date and time of `instant` in this zone.
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            ViewerZone::Local => instant.with_timezone(&Local).naive_local(),
            ViewerZone::Utc => instant.naive_utc(),
            ViewerZone::Fixed(off) => instant.with_timezone(off).naive_local(),
        }
    }

    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local_datetime(instant).date()
    }

    /// Start of `date` in this zone, as an absolute instant.
    ///
    /// When midnight does not exist (DST gap at 00:00) the first instant
    /// after the gap is used.
    pub fn midnight(&self, date: NaiveDate) -> AppResult<DateTime<Utc>> {
        let naive = date.and_time(NaiveTime::MIN);
        match self {
            ViewerZone::Local => resolve(Local.from_local_datetime(&naive), date),
            ViewerZone::Utc => Ok(naive.and_utc()),
            ViewerZone::Fixed(off) => resolve(off.from_local_datetime(&naive), date),
        }
    }
}

fn resolve<Tz: TimeZone>(res: LocalResult<DateTime<Tz>>, date: NaiveDate) -> AppResult<DateTime<Utc>> {
    match res {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => Ok(t.with_timezone(&Utc)),
        LocalResult::None => {
            let after_gap = date.and_hms_opt(1, 0, 0).and_then(|n| {
                Local
                    .from_local_datetime(&n)
                    .earliest()
                    .map(|t| t.with_timezone(&Utc))
            });
            after_gap.ok_or_else(|| AppError::InvalidDate(date.to_string()))
        }
    }
}

impl fmt::Display for ViewerZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerZone::Local => write!(f, "local"),
            ViewerZone::Utc => write!(f, "utc"),
            ViewerZone::Fixed(off) => write!(f, "{off}"),
        }
    }
}
