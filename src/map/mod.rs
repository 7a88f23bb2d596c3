//! Route map: polyline plus start/pickup/dropoff/rest-stop markers drawn
//! onto whatever map surface the environment supplies.

pub mod route;
pub mod surface;

pub use route::{LatLng, MapMarker, MarkerKind, RouteMap};
pub use surface::{MapSurface, NullMapSurface, SvgMapSurface};

/// Shown instead of a map when the trip carries no coordinates.
pub const NO_ROUTE_MESSAGE: &str = "No route data available";
