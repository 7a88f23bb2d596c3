use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};
use crate::models::trip::Trip;

pub fn handle(cmd: &Commands, cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let opts = ExportOptions::from_config(cfg)?;
        ExportLogic::export(trip, &opts, format, file.as_deref(), *force)?;
    }
    Ok(())
}
