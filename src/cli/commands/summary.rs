use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::{daily_miles, group_by_day};
use crate::core::summary::{StatusTotals, TripOverview, format_drive_time};
use crate::errors::AppResult;
use crate::models::trip::Trip;
use crate::ui::messages::header;
use crate::utils::colors::paint_status;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Summary = cmd {
        let zone = cfg.viewer_zone()?;
        let overview = TripOverview::from_trip(trip, &zone);

        println!("{}", bold("Trip Summary"));
        println!("  Total Distance      : {:.0} miles", overview.total_miles);
        println!(
            "  Estimated Drive Time: {}",
            format_drive_time(overview.estimated_drive_hours)
        );
        println!("  Total Days          : {}", overview.days_label());
        println!();

        let buckets = group_by_day(&trip.entries, &zone);
        for (bucket, miles) in buckets.iter().zip(daily_miles(&buckets)) {
            header(bucket.label());
            println!("Total miles driving today: {:.2}", miles);

            let totals = StatusTotals::from_entries(&bucket.entries);
            let mut table = Table::new(vec![Column::new("Status", 22), Column::new("Hours", 6)]);
            for (status, _) in totals.iter() {
                table.add_row(vec![status.label().to_string(), totals.formatted(status)]);
            }

            let statuses: Vec<_> = totals.iter().map(|(s, _)| s).collect();
            print!(
                "{}",
                table.render_with(|r, c, cell| match c {
                    0 => paint_status(statuses[r], cell),
                    _ => cell.to_string(),
                })
            );
            println!();
        }
    }
    Ok(())
}
