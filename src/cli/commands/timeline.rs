use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::group_by_day;
use crate::core::summary::format_duration;
use crate::errors::AppResult;
use crate::models::trip::Trip;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, paint_status};
use crate::utils::formatting::{format_date_time, wrap_note};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Timeline = cmd {
        let zone = cfg.viewer_zone()?;
        let buckets = group_by_day(&trip.entries, &zone);

        if buckets.is_empty() {
            info("The schedule has no entries.");
            return Ok(());
        }

        for bucket in &buckets {
            header(bucket.label());

            let mut table = Table::new(vec![
                Column::new("Status", 22),
                Column::new("Start", 16),
                Column::new("End", 16),
                Column::new("Duration", 8),
                Column::new("Note", cfg.wrap_notes.max(4)),
            ]);
            // status of each rendered row; continuation lines of a wrapped
            // note carry None
            let mut row_status = Vec::new();

            for entry in &bucket.entries {
                let mut lines = wrap_note(entry.note(), cfg.wrap_notes).into_iter();
                table.add_row(vec![
                    entry.status.label().to_string(),
                    format_date_time(entry.start, &zone),
                    format_date_time(entry.end, &zone),
                    format_duration(entry.start, entry.end),
                    lines.next().unwrap_or_default(),
                ]);
                row_status.push(Some(entry.status));

                for line in lines {
                    table.add_row(vec![String::new(), String::new(), String::new(), String::new(), line]);
                    row_status.push(None);
                }
            }

            print!(
                "{}",
                table.render_with(|r, c, cell| match (c, row_status[r]) {
                    (0, Some(status)) => paint_status(status, cell),
                    (4, _) => colorize_optional(cell),
                    _ => cell.to_string(),
                })
            );
            println!();
        }
    }
    Ok(())
}
