use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_catalog::Category;
use shelf_lib::SeriesGateway;

use crate::CliError;

use super::{open_gateway, runtime};

pub(crate) fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    let stats = runtime()?.block_on(gateway.stats())?;

    log::info!("{}", "Shelf Statistics".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    log::info!("  Total:          {:>6}", stats.total);
    log::info!("  Library:        {:>6}", stats.library);
    log::info!("  Wishlist:       {:>6}", stats.wishlist);

    crate::log_blank();
    log::info!("{}", "Library by reading status".if_supports_color(Stdout, |t| t.bold()));
    for (status, count) in &stats.by_user_status {
        log::info!(
            "  {} {:<13} {:>6}",
            status.icon(),
            format!("{}:", status.label()),
            count,
        );
    }
    Ok(())
}
