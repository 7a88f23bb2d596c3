use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
        edit_config,
        editor,
    } = cmd
    {
        if *init {
            Config::init(*force)?;
        }

        if *print_config {
            info(format!("Current configuration ({}):\n", Config::config_file().display()));
            print!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }

        if !*init && !*print_config && !*edit_config {
            info(format!("Config file: {}", Config::config_file().display()));
        }
    }

    Ok(())
}

fn edit(requested: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        Config::init(false)?;
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });
    let editor = requested.unwrap_or(&default_editor);

    match Command::new(editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor}'"));
            return Config::load().map(|_| ());
        }
        _ if editor != default_editor => {
            warning(format!(
                "Editor '{editor}' not available, falling back to '{default_editor}'"
            ));
        }
        _ => {
            error(format!("Failed to edit configuration file using '{editor}'"));
            return Ok(());
        }
    }

    match Command::new(&default_editor).arg(&path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited using fallback '{default_editor}'"
            ));
        }
        _ => error(format!(
            "Failed to edit configuration file using fallback '{default_editor}'"
        )),
    }

    Config::load().map(|_| ())
}
