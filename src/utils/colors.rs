//! Color helpers shared by the terminal output and the PDF surface.

use crate::models::duty_status::DutyStatus;
use ansi_term::Colour;

pub const GREY: Colour = Colour::Fixed(244);

/// `#rrggbb` → normalized RGB. Malformed input yields black, like a canvas
/// falling back to its default stroke.
pub fn hex_to_rgb(hex: &str) -> (f32, f32, f32) {
    parse_hex_rgb(hex).unwrap_or((0.0, 0.0, 0.0))
}

pub fn parse_hex_rgb(hex: &str) -> Option<(f32, f32, f32)> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}

/// Truecolor terminal colour matching the chart color of `status`.
pub fn status_colour(status: DutyStatus) -> Colour {
    let (r, g, b) = hex_to_rgb(status.color());
    Colour::RGB((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

pub fn paint_status(status: DutyStatus, text: &str) -> String {
    status_colour(status).bold().paint(text).to_string()
}

/// Grey for empty cells ("", "--"), plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        GREY.paint(value).to_string()
    } else {
        value.to_string()
    }
}
