use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_catalog::FilterState;
use shelf_lib::{BrowseController, MISSING_TITLE, SeriesGateway};

use crate::CliError;

use super::{open_gateway, runtime};

/// Delete one series, naming it first so the user knows what went.
pub(crate) fn run_delete(db_path: Option<PathBuf>, id: i64, confirm: bool) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    runtime()?.block_on(delete_one(gateway, id, confirm))
}

async fn delete_one(gateway: impl SeriesGateway, id: i64, confirm: bool) -> Result<(), CliError> {
    let controller = BrowseController::new(gateway);
    controller.initialize().await?;

    let mut title = controller.find_display_title(id);
    if title == MISSING_TITLE {
        // Not on the first page; ask the store directly.
        title = controller.gateway().fetch_one(id).await?.display_title().to_string();
    }

    if !confirm {
        log::warn!("This will permanently delete series #{}: {}", id, title);
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  shelf delete {} --confirm", id);
        return Ok(());
    }

    controller.focus(id);
    let removed = controller.delete_focused().await?;
    controller.close();

    if removed {
        log::info!(
            "Deleted {}",
            title.if_supports_color(Stdout, |t| t.bold()),
        );
        Ok(())
    } else {
        Err(CliError::NotFound(id))
    }
}

/// Delete every series.
pub(crate) fn run_reset(db_path: Option<PathBuf>, confirm: bool) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    let rt = runtime()?;

    let total = rt.block_on(gateway.count(&FilterState::default()))?;
    if total == 0 {
        log::info!("The shelf is already empty.");
        return Ok(());
    }

    if !confirm {
        log::warn!("This will permanently delete all {} series.", total);
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  shelf reset --confirm");
        return Ok(());
    }

    let removed = rt.block_on(gateway.delete_all())?;
    log::info!(
        "{}",
        format!("Deleted {} series.", removed).if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
