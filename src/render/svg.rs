//! SVG drawing surface.

use crate::models::duty_status::DutyStatus;
use crate::render::duty_path::{
    ARROW_HALF_HEIGHT, ARROW_LENGTH, CONNECTOR_COLOR, MARKER_DOT_RADIUS, MARKER_RADIUS,
    SEGMENT_WIDTH, SHADOW_OFFSET, Surface, TextAnchor,
};
use crate::render::geometry::Point;

const FONT_FAMILY: &str = "system-ui, sans-serif";

pub struct SvgSurface {
    width: f64,
    height: f64,
    body: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: Vec::new(),
        }
    }

    /// Soft vertical gradient used as the chart background.
    pub fn add_background(&mut self) {
        self.body.push(
            r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="#fafafa"/><stop offset="1" stop-color="#ffffff"/></linearGradient></defs>"##
                .to_string(),
        );
        self.body.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="url(#bg)"/>"#,
            fmt_num(self.width),
            fmt_num(self.height)
        ));
    }

    pub fn add_title(&mut self, at: Point, title: &str) {
        self.body.push(format!(
            r##"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="16" font-weight="bold" fill="#111827">{}</text>"##,
            fmt_num(at.x),
            fmt_num(at.y),
            escape_xml(title)
        ));
    }

    pub fn finish(self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );
        out.push('\n');
        for el in self.body {
            out.push_str("  ");
            out.push_str(&el);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn segment(&mut self, from: Point, to: Point, status: DutyStatus, shadow: bool) {
        if shadow {
            self.body.push(format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgba(0,0,0,0.1)" stroke-width="{}"/>"#,
                fmt_num(from.x),
                fmt_num(from.y + SHADOW_OFFSET),
                fmt_num(to.x),
                fmt_num(to.y + SHADOW_OFFSET),
                fmt_num(SEGMENT_WIDTH + 1.0)
            ));
        }
        self.body.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            status.color(),
            fmt_num(SEGMENT_WIDTH)
        ));
    }

    fn connector(&mut self, x: f64, from_y: f64, to_y: f64) {
        self.body.push(format!(
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{CONNECTOR_COLOR}" stroke-width="2" stroke-dasharray="4 4"/>"#,
            fmt_num(from_y),
            fmt_num(to_y),
            x = fmt_num(x)
        ));
    }

    fn arrow(&mut self, tip: Point, status: DutyStatus) {
        self.body.push(format!(
            r#"<polygon points="{},{} {},{} {},{}" fill="{}"/>"#,
            fmt_num(tip.x),
            fmt_num(tip.y),
            fmt_num(tip.x - ARROW_LENGTH),
            fmt_num(tip.y - ARROW_HALF_HEIGHT),
            fmt_num(tip.x - ARROW_LENGTH),
            fmt_num(tip.y + ARROW_HALF_HEIGHT),
            status.color()
        ));
    }

    fn marker(&mut self, center: Point, status: DutyStatus, note: &str) {
        let (cx, cy) = (fmt_num(center.x), fmt_num(center.y));
        self.body.push(format!(
            r##"<g class="note-marker"><title>{}</title><circle cx="{cx}" cy="{cy}" r="{}" fill="#ffffff" stroke="{color}" stroke-width="2"/><circle cx="{cx}" cy="{cy}" r="{}" fill="{color}"/></g>"##,
            escape_xml(note),
            fmt_num(MARKER_RADIUS),
            fmt_num(MARKER_DOT_RADIUS),
            color = status.color()
        ));
    }

    fn grid_line(&mut self, from: Point, to: Point, emphasis: bool) {
        let (color, width) = if emphasis {
            ("#d1d5db", "1.5")
        } else {
            ("#e5e7eb", "1")
        };
        self.body.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{width}"/>"#,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y)
        ));
    }

    fn dot(&mut self, center: Point, radius: f64, color: &str) {
        self.body.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{color}"/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(radius)
        ));
    }

    fn text(&mut self, at: Point, text: &str, size: f64, color: &str, anchor: TextAnchor) {
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        self.body.push(format!(
            r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}" fill="{color}" text-anchor="{anchor}">{}</text>"#,
            fmt_num(at.x),
            fmt_num(at.y),
            fmt_num(size),
            escape_xml(text)
        ));
    }
}

/// At most two decimals, no trailing zeros.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
