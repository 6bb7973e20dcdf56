use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::settings;

use crate::CliError;

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Show the settings file and where the database resolves to.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!("{}", "Shelf Configuration".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if db_override.is_some() {
        "--db"
    } else if settings::load_database_path_at(&path).is_some() {
        "settings"
    } else {
        "default"
    };
    let db_path = settings::resolve_database_path(db_override);
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Save (or clear) the database path in the settings file.
pub(crate) fn run_config_set_db(path: Option<PathBuf>) -> Result<(), CliError> {
    let path = match path {
        Some(p) if p.is_relative() => Some(std::env::current_dir()?.join(p)),
        other => other,
    };

    settings::save_database_path(path.as_deref())
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;

    match path {
        Some(p) => log::info!(
            "Database path set to {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "Database path cleared; using {}",
            settings::default_database_path().display(),
        ),
    }
    Ok(())
}
