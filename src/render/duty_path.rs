//! Duty-path layout and drawing.
//!
//! `layout_day` turns one day's entries into a list of draw operations;
//! `draw` replays them onto any [`Surface`]. The SVG view and the PDF
//! export only differ in their surface and [`RenderStyle`].

use crate::models::duty_status::DutyStatus;
use crate::models::schedule_entry::ScheduleEntry;
use crate::render::geometry::{DayLayout, GridGeometry, HOURS_PER_DAY, Point};

pub const SEGMENT_WIDTH: f64 = 4.0;
pub const SHADOW_OFFSET: f64 = 2.0;
pub const ARROW_LENGTH: f64 = 8.0;
pub const ARROW_HALF_HEIGHT: f64 = 5.0;
pub const MARKER_RADIUS: f64 = 6.0;
pub const MARKER_DOT_RADIUS: f64 = 3.0;
pub const CONNECTOR_COLOR: &str = "#9ca3af";

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Horizontal duty segment on the status row.
    Segment {
        from: Point,
        to: Point,
        status: DutyStatus,
    },
    /// Dashed vertical join between consecutive entries.
    Connector { x: f64, from_y: f64, to_y: f64 },
    /// "Continues into next day" glyph, tip at the window edge.
    Arrow { tip: Point, status: DutyStatus },
    /// Annotation marker for the entry at `entry_index`.
    Marker {
        center: Point,
        status: DutyStatus,
        entry_index: usize,
    },
}

/// Lay out one day's entries (in order) against the day's window.
pub fn layout_day(entries: &[ScheduleEntry], day: &DayLayout) -> Vec<DrawOp> {
    let mut ops = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        // Belongs entirely to the next day.
        if entry.start >= day.window_end {
            log::debug!(
                "skipping {} entry starting at {} (outside window)",
                entry.status.as_str(),
                entry.start
            );
            continue;
        }

        let clipped_end = entry.end.min(day.window_end);
        let x1 = day.time_to_x(entry.start);
        let x2 = day.time_to_x(clipped_end);
        let y = day.status_to_y(entry.status);

        if x2 > x1 {
            ops.push(DrawOp::Segment {
                from: Point::new(x1, y),
                to: Point::new(x2, y),
                status: entry.status,
            });
        }

        if entry.end > day.window_end {
            ops.push(DrawOp::Arrow {
                tip: Point::new(x2, y),
                status: entry.status,
            });
        }

        if let Some(next) = entries.get(i + 1).filter(|n| n.start < day.window_end) {
            ops.push(DrawOp::Connector {
                x: x2,
                from_y: y,
                to_y: day.status_to_y(next.status),
            });
        }

        let status_changed = i == 0 || entries[i - 1].status != entry.status;
        if entry.note.is_some() && status_changed {
            ops.push(DrawOp::Marker {
                center: Point::new(x1, y),
                status: entry.status,
                entry_index: i,
            });
        }
    }

    ops
}

/// Which decorations a surface gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub shadow: bool,
    pub markers: bool,
}

impl RenderStyle {
    pub const INTERACTIVE: RenderStyle = RenderStyle {
        shadow: true,
        markers: true,
    };
    pub const EXPORT: RenderStyle = RenderStyle {
        shadow: false,
        markers: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Drawing target. Coordinates are logical canvas units, y pointing down.
pub trait Surface {
    fn segment(&mut self, from: Point, to: Point, status: DutyStatus, shadow: bool);
    fn connector(&mut self, x: f64, from_y: f64, to_y: f64);
    fn arrow(&mut self, tip: Point, status: DutyStatus);
    fn marker(&mut self, center: Point, status: DutyStatus, note: &str);

    fn grid_line(&mut self, from: Point, to: Point, emphasis: bool);
    fn dot(&mut self, center: Point, radius: f64, color: &str);
    fn text(&mut self, at: Point, text: &str, size: f64, color: &str, anchor: TextAnchor);
}

/// Replay `ops` onto `surface`. Markers are drawn last so they sit on top
/// of segments and connectors.
pub fn draw<S: Surface + ?Sized>(
    ops: &[DrawOp],
    entries: &[ScheduleEntry],
    surface: &mut S,
    style: RenderStyle,
) {
    for op in ops {
        match op {
            DrawOp::Segment { from, to, status } => {
                surface.segment(*from, *to, *status, style.shadow)
            }
            DrawOp::Connector { x, from_y, to_y } => surface.connector(*x, *from_y, *to_y),
            DrawOp::Arrow { tip, status } => surface.arrow(*tip, *status),
            DrawOp::Marker { .. } => {}
        }
    }

    if !style.markers {
        return;
    }

    for op in ops {
        if let DrawOp::Marker {
            center,
            status,
            entry_index,
        } = op
        {
            let note = entries
                .get(*entry_index)
                .and_then(|e| e.note())
                .unwrap_or_default();
            surface.marker(*center, *status, note);
        }
    }
}

/// Hour-column label: 12 AM, 1..11, 12 PM, 1..12.
pub fn hour_label(hour: usize) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => h.to_string(),
        h => (h - 12).to_string(),
    }
}

/// Grid, hour labels and status legend for one canvas.
pub fn draw_grid<S: Surface + ?Sized>(geometry: &GridGeometry, surface: &mut S) {
    let (left, right) = (geometry.left(), geometry.right());
    let (top, bottom) = (geometry.top(), geometry.bottom());

    for row in 0..=DutyStatus::ALL.len() {
        let y = geometry.row_line_y(row);
        surface.grid_line(Point::new(left, y), Point::new(right, y), false);
    }

    for hour in 0..=HOURS_PER_DAY {
        let x = geometry.hour_to_x(hour as f64);
        surface.grid_line(Point::new(x, top), Point::new(x, bottom), hour % 6 == 0);
        surface.text(
            Point::new(x, bottom + 18.0),
            &hour_label(hour),
            12.0,
            "#6b7280",
            TextAnchor::Middle,
        );
    }

    for status in DutyStatus::ALL {
        let y = geometry.status_to_y(status);
        surface.dot(Point::new(left - 20.0, y), 5.0, status.color());
        surface.text(
            Point::new(left - 3.0, y + 14.0),
            status.label(),
            13.0,
            "#374151",
            TextAnchor::End,
        );
    }
}
