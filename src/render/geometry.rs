//! Grid layout engine: maps (status, instant) pairs onto the logical canvas.
//!
//! Both the interactive view and the PDF export go through this module.
//! Export-only page placement lives in [`PageTransform`], on top of it.

use crate::models::duty_status::DutyStatus;
use chrono::{DateTime, Duration, Utc};

pub const HOURS_PER_DAY: usize = 24;
pub const STATUS_ROWS: usize = DutyStatus::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Fixed logical canvas: 24 hourly columns × 4 status rows inside a margin,
/// optionally shifted by `offset`. The shift grows the canvas, so the area
/// left of the plot widens by `offset.x` (the export uses it as a label
/// gutter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub offset: Point,
}

impl GridGeometry {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
            offset: Point::default(),
        }
    }

    pub fn with_offset(mut self, dx: f64, dy: f64) -> Self {
        self.offset = Point::new(dx, dy);
        self
    }

    /// Full canvas width, including the offset.
    pub fn outer_width(&self) -> f64 {
        self.width + self.offset.x
    }

    /// Full canvas height, including the offset.
    pub fn outer_height(&self) -> f64 {
        self.height + self.offset.y
    }

    pub fn row_height(&self) -> f64 {
        (self.height - 2.0 * self.margin) / STATUS_ROWS as f64
    }

    pub fn col_width(&self) -> f64 {
        (self.width - 2.0 * self.margin) / HOURS_PER_DAY as f64
    }

    pub fn left(&self) -> f64 {
        self.margin + self.offset.x
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin + self.offset.x
    }

    pub fn top(&self) -> f64 {
        self.margin + self.offset.y
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin + self.offset.y
    }

    /// Unclamped x of a fractional hour since the reference midnight.
    pub fn hour_to_x(&self, hours: f64) -> f64 {
        self.left() + hours * self.col_width()
    }

    /// x of `instant`, clamped to the plot area.
    pub fn time_to_x(&self, midnight: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
        let hours = hours_since(midnight, instant);
        self.hour_to_x(hours).clamp(self.left(), self.right())
    }

    /// y of the middle of the status row.
    pub fn status_to_y(&self, status: DutyStatus) -> f64 {
        self.top() + (status.row_index() as f64 + 0.5) * self.row_height()
    }

    /// y of the boundary line above row `row` (`row == 4` is the bottom).
    pub fn row_line_y(&self, row: usize) -> f64 {
        self.top() + row as f64 * self.row_height()
    }

    /// Status row containing `y`, if inside the plot area.
    pub fn row_at_y(&self, y: f64) -> Option<DutyStatus> {
        if y < self.top() || y >= self.bottom() {
            return None;
        }
        let row = ((y - self.top()) / self.row_height()).floor() as usize;
        DutyStatus::from_row(row)
    }
}

pub fn hours_since(midnight: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    (instant - midnight).num_milliseconds() as f64 / 3_600_000.0
}

/// One day's chart frame: the geometry plus the `[midnight, midnight+24h)`
/// window it represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayLayout {
    pub geometry: GridGeometry,
    pub midnight: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

impl DayLayout {
    pub fn new(geometry: GridGeometry, midnight: DateTime<Utc>) -> Self {
        Self {
            geometry,
            midnight,
            window_end: midnight + Duration::hours(HOURS_PER_DAY as i64),
        }
    }

    pub fn time_to_x(&self, instant: DateTime<Utc>) -> f64 {
        self.geometry.time_to_x(self.midnight, instant)
    }

    pub fn status_to_y(&self, status: DutyStatus) -> f64 {
        self.geometry.status_to_y(status)
    }
}

/// Places a y-down canvas of `canvas_height` onto a y-up PDF page, with the
/// canvas top-left corner at `origin` (page coordinates measured from the
/// top-left, like the canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    pub origin: Point,
    pub page_height: f64,
}

impl PageTransform {
    pub fn new(origin: Point, page_height: f64) -> Self {
        Self {
            origin,
            page_height,
        }
    }

    /// Canvas point → PDF user space.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + p.x,
            self.page_height - (self.origin.y + p.y),
        )
    }

    /// `cm` matrix placing a y-up form of `canvas_height` so that its top
    /// edge lands on `origin`.
    pub fn placement(&self, canvas_height: f64) -> [f32; 6] {
        [
            1.0,
            0.0,
            0.0,
            1.0,
            self.origin.x as f32,
            (self.page_height - self.origin.y - canvas_height) as f32,
        ]
    }
}
