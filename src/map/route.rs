use crate::map::surface::MapSurface;
use crate::models::trip::Trip;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// From a GeoJSON `[lng, lat]` pair.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Start,
    Pickup,
    Dropoff,
    RestStop,
}

impl MarkerKind {
    pub fn title(&self) -> &'static str {
        match self {
            MarkerKind::Start => "Current Location",
            MarkerKind::Pickup => "Pickup Location",
            MarkerKind::Dropoff => "Dropoff Location",
            MarkerKind::RestStop => "Rest Stop",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarkerKind::Start => "#3b82f6",
            MarkerKind::Pickup => "#22c55e",
            MarkerKind::Dropoff => "#ef4444",
            MarkerKind::RestStop => "#f59e0b",
        }
    }

    /// Marker diameter in surface units.
    pub fn size(&self) -> f64 {
        match self {
            MarkerKind::RestStop => 16.0,
            _ => 24.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub position: LatLng,
    pub caption: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteMap {
    pub path: Vec<LatLng>,
    pub markers: Vec<MapMarker>,
}

impl RouteMap {
    pub fn from_trip(trip: &Trip) -> Self {
        let path: Vec<LatLng> = trip.route.iter().copied().map(LatLng::from_lng_lat).collect();
        let Some((&first, &last)) = path.first().zip(path.last()) else {
            return Self::default();
        };

        let mut markers = vec![
            MapMarker {
                kind: MarkerKind::Start,
                position: first,
                caption: "Start of route".into(),
            },
            MapMarker {
                kind: MarkerKind::Pickup,
                position: path[path.len() / 3],
                caption: "Cargo pickup point".into(),
            },
            MapMarker {
                kind: MarkerKind::Dropoff,
                position: last,
                caption: "Final destination".into(),
            },
        ];

        for entry in trip.entries.iter().filter(|e| e.status.is_rest()) {
            let index = rest_stop_index(entry.miles_since_start, trip.total_miles, path.len());
            markers.push(MapMarker {
                kind: MarkerKind::RestStop,
                position: path[index],
                caption: entry.note().unwrap_or_default().to_string(),
            });
        }

        Self { path, markers }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn rest_stops(&self) -> impl Iterator<Item = &MapMarker> {
        self.markers
            .iter()
            .filter(|m| m.kind == MarkerKind::RestStop)
    }

    /// Polyline first, then markers, then fit the view to the route.
    pub fn draw<S: MapSurface>(&self, surface: &mut S) {
        if self.is_empty() {
            return;
        }
        surface.polyline(&self.path);
        for marker in &self.markers {
            surface.marker(marker);
        }
        surface.fit_bounds(&self.path);
    }
}

/// Coordinate index for a rest stop `miles` into a `total_miles` trip over a
/// path of `len` points. A trip without a usable total maps to the start.
pub fn rest_stop_index(miles: f64, total_miles: f64, len: usize) -> usize {
    if len == 0 || total_miles <= 0.0 {
        return 0;
    }
    let last = len - 1;
    let progress = (miles / total_miles).max(0.0);
    ((progress * last as f64).floor() as usize).min(last)
}
