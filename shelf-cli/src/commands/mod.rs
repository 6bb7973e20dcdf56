pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod stats;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_catalog::{Category, Series};
use shelf_lib::{SqliteGateway, settings};

use crate::CliError;

/// Open the series database, resolving the path from `--db` and settings.
pub(crate) fn open_gateway(db_path: Option<PathBuf>) -> Result<SqliteGateway, CliError> {
    let db_path = settings::resolve_database_path(db_path);
    log::debug!("Using database {}", db_path.display());
    SqliteGateway::open(&db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open database {}: {}",
            db_path.display(),
            e
        ))
    })
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// Print every field of a series.
pub(crate) fn log_series(series: &Series) {
    log::info!(
        "{} {}",
        format!("#{}", series.id).if_supports_color(Stdout, |t| t.dimmed()),
        series
            .display_title()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log_field("English title", &series.title_en);
    log_field("Japanese title", &series.title_jp);
    log_field("Primary", series.primary_language.label());
    log_field("Placement", series.placement().label());
    log_field("Type", series.book_type.label());
    log_field("Author status", series.author_status.label());
    log_field("Total volumes", &series.total_volumes);
    log_field(
        "Reading",
        &format!("{} {}", series.user_status.icon(), series.user_status.label()),
    );
    log_field("Volumes owned", &series.volumes_owned);
    log_field("Priority", series.priority.label());
    log_field("Rating", &format!("{}/{}", series.rating, shelf_catalog::MAX_RATING));
    log_field("Description", &series.description);
    log_field("Notes", &series.notes);
}

fn log_field(name: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    log::info!(
        "  {:<15} {}",
        format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
