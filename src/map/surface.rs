use crate::map::route::{LatLng, MapMarker};
use crate::render::svg::{escape_xml, fmt_num};

const ROUTE_COLOR: &str = "#3b82f6";
const ROUTE_WEIGHT: f64 = 4.0;
const FIT_PADDING: f64 = 50.0;

/// Drawing capability a map backend provides.
pub trait MapSurface {
    fn polyline(&mut self, path: &[LatLng]);
    fn marker(&mut self, marker: &MapMarker);
    fn fit_bounds(&mut self, path: &[LatLng]);
}

/// Surface for contexts with nothing to draw on.
#[derive(Debug, Default)]
pub struct NullMapSurface;

impl MapSurface for NullMapSurface {
    fn polyline(&mut self, _path: &[LatLng]) {}
    fn marker(&mut self, _marker: &MapMarker) {}
    fn fit_bounds(&mut self, _path: &[LatLng]) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Bounds {
    fn of(path: &[LatLng]) -> Option<Self> {
        let first = path.first()?;
        let init = Bounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        Some(path.iter().fold(init, |b, p| Bounds {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lng: b.min_lng.min(p.lng),
            max_lng: b.max_lng.max(p.lng),
        }))
    }
}

/// Static SVG map: equirectangular projection of the fitted bounds into the
/// canvas minus a fixed padding. No tiles.
pub struct SvgMapSurface {
    width: f64,
    height: f64,
    bounds: Option<Bounds>,
    lines: Vec<Vec<LatLng>>,
    markers: Vec<MapMarker>,
}

impl SvgMapSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            bounds: None,
            lines: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Canvas position of `p`. Uniform scale, centred, north up.
    pub fn project(&self, p: LatLng) -> (f64, f64) {
        let Some(b) = self.bounds else {
            return (self.width / 2.0, self.height / 2.0);
        };
        let inner_w = (self.width - 2.0 * FIT_PADDING).max(1.0);
        let inner_h = (self.height - 2.0 * FIT_PADDING).max(1.0);
        let span_lng = b.max_lng - b.min_lng;
        let span_lat = b.max_lat - b.min_lat;

        let scale = match (span_lng > 0.0, span_lat > 0.0) {
            (true, true) => (inner_w / span_lng).min(inner_h / span_lat),
            (true, false) => inner_w / span_lng,
            (false, true) => inner_h / span_lat,
            (false, false) => 0.0,
        };

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let mid_lng = (b.min_lng + b.max_lng) / 2.0;
        let mid_lat = (b.min_lat + b.max_lat) / 2.0;
        (cx + (p.lng - mid_lng) * scale, cy - (p.lat - mid_lat) * scale)
    }

    pub fn finish(self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );
        out.push('\n');
        out.push_str(&format!(
            r##"<rect x="0" y="0" width="{}" height="{}" fill="#f8fafc"/>"##,
            fmt_num(self.width),
            fmt_num(self.height)
        ));
        out.push('\n');

        for line in &self.lines {
            let points: Vec<String> = line
                .iter()
                .map(|p| {
                    let (x, y) = self.project(*p);
                    format!("{},{}", fmt_num(x), fmt_num(y))
                })
                .collect();
            out.push_str(&format!(
                r#"<polyline points="{}" fill="none" stroke="{ROUTE_COLOR}" stroke-width="{}" stroke-opacity="0.8" stroke-linejoin="round"/>"#,
                points.join(" "),
                fmt_num(ROUTE_WEIGHT)
            ));
            out.push('\n');
        }

        for m in &self.markers {
            let (x, y) = self.project(m.position);
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="white" stroke-width="3"><title>{}</title></circle>"#,
                fmt_num(x),
                fmt_num(y),
                fmt_num(m.kind.size() / 2.0),
                m.kind.color(),
                escape_xml(&caption(m))
            ));
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

fn caption(m: &MapMarker) -> String {
    if m.caption.is_empty() {
        m.kind.title().to_string()
    } else {
        format!("{}: {}", m.kind.title(), m.caption)
    }
}

impl MapSurface for SvgMapSurface {
    fn polyline(&mut self, path: &[LatLng]) {
        self.lines.push(path.to_vec());
    }

    fn marker(&mut self, marker: &MapMarker) {
        self.markers.push(marker.clone());
    }

    fn fit_bounds(&mut self, path: &[LatLng]) {
        if let Some(b) = Bounds::of(path) {
            self.bounds = Some(b);
        }
    }
}
