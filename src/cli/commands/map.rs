use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::map::{NO_ROUTE_MESSAGE, RouteMap, SvgMapSurface};
use crate::models::trip::Trip;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Map {
        file,
        width,
        height,
    } = cmd
    {
        let route = RouteMap::from_trip(trip);
        if route.is_empty() {
            warning(NO_ROUTE_MESSAGE);
            return Ok(());
        }

        let mut surface = SvgMapSurface::new(*width, *height);
        route.draw(&mut surface);
        fs::write(file, surface.finish())?;

        success(format!(
            "Route map written to {} ({} points, {} rest stops)",
            file,
            route.path.len(),
            route.rest_stops().count()
        ));
    }
    Ok(())
}
