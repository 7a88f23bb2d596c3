// src/export/pdf_surface.rs

use crate::models::duty_status::DutyStatus;
use crate::render::duty_path::{
    ARROW_HALF_HEIGHT, ARROW_LENGTH, CONNECTOR_COLOR, MARKER_DOT_RADIUS, MARKER_RADIUS,
    SEGMENT_WIDTH, SHADOW_OFFSET, Surface, TextAnchor,
};
use crate::render::geometry::Point;
use crate::utils::colors::hex_to_rgb;
use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Name, Str};

/// Bezier constant for quarter circles.
const KAPPA: f32 = 0.552_284_8;

/// Helvetica average glyph width, as a fraction of the font size.
const AVG_GLYPH_WIDTH: f64 = 0.5;

/// Draws onto a PDF content stream whose CTM is already flipped so that
/// canvas coordinates (y down) can be used as they are.
pub struct PdfSurface<'a> {
    content: &'a mut Content,
    font: Name<'static>,
}

impl<'a> PdfSurface<'a> {
    pub fn new(content: &'a mut Content, font: Name<'static>) -> Self {
        Self { content, font }
    }

    fn stroke_rgb(&mut self, hex: &str) {
        let (r, g, b) = hex_to_rgb(hex);
        self.content.set_stroke_rgb(r, g, b);
    }

    fn fill_rgb(&mut self, hex: &str) {
        let (r, g, b) = hex_to_rgb(hex);
        self.content.set_fill_rgb(r, g, b);
    }

    fn line(&mut self, from: Point, to: Point) {
        self.content.move_to(from.x as f32, from.y as f32);
        self.content.line_to(to.x as f32, to.y as f32);
        self.content.stroke();
    }

    fn circle_path(&mut self, c: Point, r: f64) {
        let (x, y, r) = (c.x as f32, c.y as f32, r as f32);
        let k = r * KAPPA;
        self.content.move_to(x + r, y);
        self.content.cubic_to(x + r, y + k, x + k, y + r, x, y + r);
        self.content.cubic_to(x - k, y + r, x - r, y + k, x - r, y);
        self.content.cubic_to(x - r, y - k, x - k, y - r, x, y - r);
        self.content.cubic_to(x + k, y - r, x + r, y - k, x + r, y);
        self.content.close_path();
    }
}

impl Surface for PdfSurface<'_> {
    fn segment(&mut self, from: Point, to: Point, status: DutyStatus, shadow: bool) {
        self.content.save_state();
        self.content.set_line_cap(LineCapStyle::RoundCap);

        if shadow {
            self.content.set_stroke_gray(0.9);
            self.content.set_line_width((SEGMENT_WIDTH + 1.0) as f32);
            self.line(
                from.translate(0.0, SHADOW_OFFSET),
                to.translate(0.0, SHADOW_OFFSET),
            );
        }

        self.stroke_rgb(status.color());
        self.content.set_line_width(SEGMENT_WIDTH as f32);
        self.line(from, to);
        self.content.restore_state();
    }

    fn connector(&mut self, x: f64, from_y: f64, to_y: f64) {
        self.content.save_state();
        self.stroke_rgb(CONNECTOR_COLOR);
        self.content.set_line_width(2.0);
        self.content.set_dash_pattern([4.0, 4.0], 0.0);
        self.line(Point::new(x, from_y), Point::new(x, to_y));
        self.content.restore_state();
    }

    fn arrow(&mut self, tip: Point, status: DutyStatus) {
        self.content.save_state();
        self.fill_rgb(status.color());
        self.content.move_to(tip.x as f32, tip.y as f32);
        self.content.line_to(
            (tip.x - ARROW_LENGTH) as f32,
            (tip.y - ARROW_HALF_HEIGHT) as f32,
        );
        self.content.line_to(
            (tip.x - ARROW_LENGTH) as f32,
            (tip.y + ARROW_HALF_HEIGHT) as f32,
        );
        self.content.close_path();
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn marker(&mut self, center: Point, status: DutyStatus, _note: &str) {
        self.content.save_state();
        self.content.set_fill_gray(1.0);
        self.stroke_rgb(status.color());
        self.content.set_line_width(2.0);
        self.circle_path(center, MARKER_RADIUS);
        self.content.fill_nonzero_and_stroke();

        self.fill_rgb(status.color());
        self.circle_path(center, MARKER_DOT_RADIUS);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn grid_line(&mut self, from: Point, to: Point, emphasis: bool) {
        self.content.save_state();
        if emphasis {
            self.stroke_rgb("#d1d5db");
            self.content.set_line_width(1.5);
        } else {
            self.stroke_rgb("#e5e7eb");
            self.content.set_line_width(1.0);
        }
        self.line(from, to);
        self.content.restore_state();
    }

    fn dot(&mut self, center: Point, radius: f64, color: &str) {
        self.content.save_state();
        self.fill_rgb(color);
        self.circle_path(center, radius);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn text(&mut self, at: Point, text: &str, size: f64, color: &str, anchor: TextAnchor) {
        let width = text.chars().count() as f64 * size * AVG_GLYPH_WIDTH;
        let x = match anchor {
            TextAnchor::Start => at.x,
            TextAnchor::Middle => at.x - width / 2.0,
            TextAnchor::End => at.x - width,
        }
        .max(0.0);

        self.content.save_state();
        self.fill_rgb(color);
        self.content.begin_text();
        self.content.set_font(self.font, size as f32);
        // Undo the canvas flip so glyphs stay upright.
        self.content
            .set_text_matrix([1.0, 0.0, 0.0, -1.0, x as f32, at.y as f32]);
        self.content.show(Str(text.as_bytes()));
        self.content.end_text();
        self.content.restore_state();
    }
}
