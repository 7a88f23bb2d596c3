//! Single-owner holder for the trip currently being viewed.

use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Holds at most one validated trip. Loading replaces the previous trip,
/// `clear` drops it; readers get `NoData` when nothing is loaded.
#[derive(Debug, Default)]
pub struct TripSession {
    trip: Option<Trip>,
}

impl TripSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, trip: Trip) {
        self.trip = Some(trip);
    }

    /// Read and validate a trip response; `-` reads stdin.
    pub fn load_from_path(&mut self, path: &str) -> AppResult<&Trip> {
        let json = if path == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            let p = Path::new(path);
            if !p.exists() {
                log::warn!("trip response not found: {}", p.display());
                return Err(AppError::NoData);
            }
            fs::read_to_string(p)?
        };

        let trip = match Trip::from_json(&json) {
            Ok(trip) => trip,
            Err(AppError::Json(e)) => {
                log::warn!("unreadable trip response from {path}: {e}");
                return Err(AppError::NoData);
            }
            Err(e) => return Err(e),
        };
        Ok(self.trip.insert(trip))
    }

    pub fn clear(&mut self) {
        self.trip = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.trip.is_some()
    }

    pub fn trip(&self) -> AppResult<&Trip> {
        self.trip.as_ref().ok_or(AppError::NoData)
    }
}
