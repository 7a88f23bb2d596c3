//! Interactive driver-log view for one day: the SVG chart plus pointer
//! hit-testing against the annotation markers.

use crate::core::zone::ViewerZone;
use crate::errors::AppResult;
use crate::models::day_bucket::DayBucket;
use crate::models::duty_status::DutyStatus;
use crate::models::schedule_entry::ScheduleEntry;
use crate::render::duty_path::{DrawOp, RenderStyle, draw, draw_grid, layout_day};
use crate::render::geometry::{DayLayout, GridGeometry, Point};
use crate::render::svg::SvgSurface;

pub const DEFAULT_HOVER_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NoteMarker {
    pub center: Point,
    pub status: DutyStatus,
    pub note: String,
}

/// Note to display, anchored at the pointer position (display units).
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct LogView {
    label: String,
    layout: DayLayout,
    entries: Vec<ScheduleEntry>,
    ops: Vec<DrawOp>,
    markers: Vec<NoteMarker>,
    hover_radius: f64,
}

impl LogView {
    pub fn new(bucket: &DayBucket, zone: &ViewerZone, geometry: GridGeometry) -> AppResult<Self> {
        let layout = DayLayout::new(geometry, bucket.reference_midnight(zone)?);
        let ops = layout_day(&bucket.entries, &layout);

        let markers = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Marker {
                    center,
                    status,
                    entry_index,
                } => bucket.entries[*entry_index].note().map(|note| NoteMarker {
                    center: *center,
                    status: *status,
                    note: note.to_string(),
                }),
                _ => None,
            })
            .collect();

        Ok(Self {
            label: bucket.label(),
            layout,
            entries: bucket.entries.clone(),
            ops,
            markers,
            hover_radius: DEFAULT_HOVER_RADIUS,
        })
    }

    pub fn with_hover_radius(mut self, radius: f64) -> Self {
        self.hover_radius = radius;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.layout.geometry
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn markers(&self) -> &[NoteMarker] {
        &self.markers
    }

    pub fn to_svg(&self) -> String {
        let g = self.layout.geometry;
        let mut svg = SvgSurface::new(g.width, g.height);
        svg.add_background();
        draw_grid(&g, &mut svg);
        draw(&self.ops, &self.entries, &mut svg, RenderStyle::INTERACTIVE);
        svg.add_title(
            Point::new(g.left(), 30.0),
            &format!("Driver Log - {}", self.label),
        );
        svg.finish()
    }

    /// Nearest marker within the hover radius (inclusive) of a point in
    /// logical canvas units.
    pub fn hit_test(&self, logical: Point) -> Option<&NoteMarker> {
        self.markers
            .iter()
            .map(|m| (m, m.center.distance(logical)))
            .filter(|(_, d)| *d <= self.hover_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(m, _)| m)
    }

    /// Hit-test a pointer given in display units over a chart displayed at
    /// `displayed` (width, height). `None` clears the tooltip.
    pub fn hover(&self, pointer: Point, displayed: (f64, f64)) -> Option<Tooltip> {
        let logical = self.to_logical(pointer, displayed);
        self.hit_test(logical).map(|m| Tooltip {
            x: pointer.x,
            y: pointer.y,
            note: m.note.clone(),
        })
    }

    pub fn to_logical(&self, pointer: Point, displayed: (f64, f64)) -> Point {
        let g = &self.layout.geometry;
        let (dw, dh) = displayed;
        let scale_x = if dw > 0.0 { g.width / dw } else { 1.0 };
        let scale_y = if dh > 0.0 { g.height / dh } else { 1.0 };
        Point::new(pointer.x * scale_x, pointer.y * scale_y)
    }
}
