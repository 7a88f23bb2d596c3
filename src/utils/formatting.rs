//! Formatting utilities used for CLI and export outputs.

use crate::core::zone::ViewerZone;
use chrono::{DateTime, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "Jan 5, 08:30 AM" in the viewer zone, as shown in the timeline.
pub fn format_date_time(instant: DateTime<Utc>, zone: &ViewerZone) -> String {
    zone.local_datetime(instant)
        .format("%b %-d, %I:%M %p")
        .to_string()
}

/// Wrap a note for a table column; an empty note becomes "--".
pub fn wrap_note(note: Option<&str>, width: usize) -> Vec<String> {
    match note {
        Some(n) if width > 0 => textwrap::wrap(n, width)
            .into_iter()
            .map(|l| l.into_owned())
            .collect(),
        Some(n) => vec![n.to_string()],
        None => vec!["--".to_string()],
    }
}
