mod common;
use common::{SAMPLE_SCHEDULE, sample_trip, trip_json};
use eldlog::map::route::rest_stop_index;
use eldlog::map::{
    LatLng, MapMarker, MapSurface, MarkerKind, NullMapSurface, RouteMap, SvgMapSurface,
};
use eldlog::models::Trip;

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl MapSurface for Recorder {
    fn polyline(&mut self, path: &[LatLng]) {
        self.calls.push(format!("polyline:{}", path.len()));
    }
    fn marker(&mut self, marker: &MapMarker) {
        self.calls.push(format!("marker:{:?}", marker.kind));
    }
    fn fit_bounds(&mut self, path: &[LatLng]) {
        self.calls.push(format!("fit:{}", path.len()));
    }
}

#[test]
fn test_route_is_converted_to_lat_lng() {
    let map = RouteMap::from_trip(&sample_trip());
    assert_eq!(map.path.len(), 7);
    assert_eq!(map.path[0], LatLng { lat: 41.9, lng: -87.6 });
}

#[test]
fn test_fixed_markers() {
    let map = RouteMap::from_trip(&sample_trip());

    let start = &map.markers[0];
    assert_eq!(start.kind, MarkerKind::Start);
    assert_eq!(start.position, map.path[0]);

    let pickup = &map.markers[1];
    assert_eq!(pickup.kind, MarkerKind::Pickup);
    assert_eq!(pickup.position, map.path[7 / 3]);

    let dropoff = &map.markers[2];
    assert_eq!(dropoff.kind, MarkerKind::Dropoff);
    assert_eq!(dropoff.position, map.path[6]);
}

#[test]
fn test_rest_stops_follow_miles() {
    let map = RouteMap::from_trip(&sample_trip());
    let stops: Vec<&MapMarker> = map.rest_stops().collect();

    // OffDuty at 0, Sleeper at 400, OffDuty at 650 (of 650)
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].position, map.path[0]);
    assert_eq!(stops[1].position, map.path[3]);
    assert_eq!(stops[2].position, map.path[6]);
    assert_eq!(stops[1].caption, "10-hour break");
    assert_eq!(stops[2].caption, "");
}

#[test]
fn test_rest_stop_index() {
    assert_eq!(rest_stop_index(0.0, 650.0, 7), 0);
    assert_eq!(rest_stop_index(325.0, 650.0, 7), 3);
    assert_eq!(rest_stop_index(649.0, 650.0, 7), 5);
    assert_eq!(rest_stop_index(900.0, 650.0, 7), 6);
    // no usable total: first coordinate
    assert_eq!(rest_stop_index(100.0, 0.0, 7), 0);
    assert_eq!(rest_stop_index(100.0, 650.0, 0), 0);
}

#[test]
fn test_empty_route_has_nothing_to_draw() {
    let trip = Trip::from_json(&trip_json(SAMPLE_SCHEDULE, "[]")).expect("trip");
    let map = RouteMap::from_trip(&trip);
    assert!(map.is_empty());
    assert!(map.markers.is_empty());

    let mut rec = Recorder::default();
    map.draw(&mut rec);
    assert!(rec.calls.is_empty());
}

#[test]
fn test_draw_order() {
    let map = RouteMap::from_trip(&sample_trip());
    let mut rec = Recorder::default();
    map.draw(&mut rec);

    assert_eq!(rec.calls.first().map(String::as_str), Some("polyline:7"));
    assert_eq!(rec.calls.last().map(String::as_str), Some("fit:7"));
    assert_eq!(
        rec.calls.iter().filter(|c| c.starts_with("marker:")).count(),
        6
    );
}

#[test]
fn test_null_surface_accepts_everything() {
    let map = RouteMap::from_trip(&sample_trip());
    map.draw(&mut NullMapSurface);
}

#[test]
fn test_svg_projection_fits_bounds() {
    let path = vec![LatLng { lat: 0.0, lng: 0.0 }, LatLng { lat: 10.0, lng: 20.0 }];
    let mut surface = SvgMapSurface::new(900.0, 600.0);
    surface.fit_bounds(&path);

    // scale = min(800 / 20, 500 / 10) = 40, centred on (450, 300)
    assert_eq!(surface.project(path[0]), (50.0, 500.0));
    assert_eq!(surface.project(path[1]), (850.0, 100.0));
}

#[test]
fn test_svg_map_output() {
    let map = RouteMap::from_trip(&sample_trip());
    let mut surface = SvgMapSurface::new(900.0, 600.0);
    map.draw(&mut surface);
    let svg = surface.finish();

    assert!(svg.contains("<polyline"));
    assert_eq!(svg.matches("<circle").count(), 6);
    assert!(svg.contains("Pickup Location"));
    assert!(svg.contains("Rest Stop: 10-hour break"));
}
