//! Trip response as produced by the planning service, and its validated form.

use crate::errors::{AppError, AppResult};
use crate::models::duty_status::DutyStatus;
use crate::models::schedule_entry::{ScheduleEntry, normalize_note};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripSummary {
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub duration_hr: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(default, rename = "type")]
    pub kind: String,
    /// `[lng, lat]` pairs.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteFeature {
    pub geometry: RouteGeometry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripRoute {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

/// Schedule entry exactly as it comes over the wire: nothing checked yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScheduleEntry {
    pub status: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub miles_since_start: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSchedule {
    #[serde(default)]
    pub total_miles: f64,
    pub schedule: Vec<RawScheduleEntry>,
    #[serde(default)]
    pub estimated_drive_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripResponse {
    #[serde(default)]
    pub summary: TripSummary,
    #[serde(default)]
    pub route: TripRoute,
    pub schedule: TripSchedule,
    #[serde(default)]
    pub estimated_drive_hours: f64,
}

/// Validated trip: every schedule entry has a known status and `end > start`.
#[derive(Debug, Clone)]
pub struct Trip {
    pub entries: Vec<ScheduleEntry>,
    pub total_miles: f64,
    pub estimated_drive_hours: f64,
    /// Route polyline as `[lng, lat]` pairs (first feature only).
    pub route: Vec<[f64; 2]>,
}

impl Trip {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let response: TripResponse = serde_json::from_str(json)?;
        Self::from_response(response)
    }

    /// Validate a raw response. The first contract violation is fatal; every
    /// violation is logged so a bad payload can be diagnosed in one run.
    pub fn from_response(response: TripResponse) -> AppResult<Self> {
        let mut entries = Vec::with_capacity(response.schedule.schedule.len());
        let mut first_error = None;

        for (index, raw) in response.schedule.schedule.iter().enumerate() {
            match validate_entry(index, raw) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    log::warn!("rejecting schedule entry: {e}");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        let route = response
            .route
            .features
            .into_iter()
            .next()
            .map(|f| f.geometry.coordinates)
            .unwrap_or_default();

        log::debug!(
            "trip loaded: {} entries, {} route points",
            entries.len(),
            route.len()
        );

        Ok(Self {
            entries,
            total_miles: response.schedule.total_miles,
            estimated_drive_hours: response.schedule.estimated_drive_hours,
            route,
        })
    }
}

fn validate_entry(index: usize, raw: &RawScheduleEntry) -> AppResult<ScheduleEntry> {
    let status = DutyStatus::parse(&raw.status).ok_or_else(|| AppError::InvalidStatus {
        index,
        value: raw.status.clone(),
    })?;

    let start = parse_instant(&raw.start)?;
    let end = parse_instant(&raw.end)?;

    if end <= start {
        return Err(AppError::InvalidInterval {
            index,
            start: raw.start.clone(),
            end: raw.end.clone(),
        });
    }

    Ok(ScheduleEntry {
        status,
        start,
        end,
        note: raw.note.as_deref().and_then(normalize_note),
        miles_since_start: raw.miles_since_start,
    })
}

/// RFC 3339 instants; offset-less ISO timestamps are taken as UTC.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}
