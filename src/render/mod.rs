pub mod duty_path;
pub mod geometry;
pub mod log_view;
pub mod svg;

pub use duty_path::{DrawOp, RenderStyle, Surface, draw, draw_grid, layout_day};
pub use geometry::{DayLayout, GridGeometry, PageTransform, Point};
pub use log_view::{LogView, NoteMarker, Tooltip};
