//! User-facing terminal messages.
//!
//! Everything the user is meant to read goes through here; diagnostics go
//! through the `log` facade instead and only show up with `-v`.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint(ICON_ERR), msg);
}

/// Section header printed before each day block.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        Blue.bold()
            .paint(format!("====================== {msg}"))
    );
}

/// Two-line notification shown once an export finishes (or fails).
pub fn notification(ok: bool, title: &str, description: &str) {
    let desc = Style::new().dimmed().paint(description);
    if ok {
        success(format!("{title}\n   {desc}"));
    } else {
        error(format!("{title}\n   {desc}"));
    }
}
