use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_catalog::{Category, FilterState, MAX_RATING, MIN_RATING, RatingRange};
use shelf_lib::{BrowseController, LoadOutcome, SeriesGateway};

use crate::CliError;
use crate::cli_types::BrowseArgs;

use super::{open_gateway, runtime, truncate_str};

const TITLE_WIDTH: usize = 48;

/// Apply command-line filters on top of the current filter state.
pub(crate) fn apply_browse_args(filters: &mut FilterState, args: BrowseArgs) {
    if let Some(search) = args.search {
        filters.search = search;
    }
    if let Some(sort) = args.sort {
        filters.sort = sort;
    }
    if let Some(selected) = args.placement {
        filters.placements = selected.into_iter().collect();
    }
    if let Some(selected) = args.book_type {
        filters.book_types = selected.into_iter().collect();
    }
    if let Some(selected) = args.author_status {
        filters.author_statuses = selected.into_iter().collect();
    }
    if let Some(selected) = args.user_status {
        filters.user_statuses = selected.into_iter().collect();
    }
    if let Some(selected) = args.priority {
        filters.priorities = selected.into_iter().collect();
    }
    if args.min_rating.is_some() || args.max_rating.is_some() {
        filters.rating = RatingRange::new(
            args.min_rating.unwrap_or(MIN_RATING),
            args.max_rating.unwrap_or(MAX_RATING),
        );
    }
}

pub(crate) fn run_list(
    db_path: Option<PathBuf>,
    browse: BrowseArgs,
    pages: u32,
) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    runtime()?.block_on(list_pages(gateway, browse, pages))
}

async fn list_pages(
    gateway: impl SeriesGateway,
    browse: BrowseArgs,
    pages: u32,
) -> Result<(), CliError> {
    let controller = BrowseController::new(gateway);
    controller
        .update_filters(|filters| apply_browse_args(filters, browse))
        .await?;

    let mut loaded = 1;
    while loaded < pages {
        match controller.load_next().await? {
            LoadOutcome::Appended(_) => loaded += 1,
            LoadOutcome::EndOfData | LoadOutcome::Busy | LoadOutcome::Superseded => break,
        }
    }

    let filters = controller.filters();
    let total = controller.gateway().count(&filters).await?;
    let rows = controller.series();
    controller.close();

    if rows.is_empty() {
        if filters.is_unfiltered() {
            log::info!("Your shelf is empty. Add a series with 'shelf add --title-en <title>'.");
        } else {
            log::info!("No series match these filters.");
        }
        return Ok(());
    }

    for row in &rows {
        let title = truncate_str(&row.title, TITLE_WIDTH);
        log::info!(
            "{} {:>5}  {:<width$}  {:<11} {}{}",
            row.icon(),
            row.id.if_supports_color(Stdout, |t| t.dimmed()),
            title.if_supports_color(Stdout, |t| t.bold()),
            row.book_type.label(),
            if row.volumes_owned.is_empty() {
                String::new()
            } else {
                format!("vol. {}", row.volumes_owned)
            },
            if row.is_on_wishlist {
                format!(" {}", "(wishlist)".if_supports_color(Stdout, |t| t.yellow()))
            } else {
                String::new()
            },
            width = TITLE_WIDTH,
        );
    }
    crate::log_blank();
    log::info!(
        "Showing {} of {} series (sorted by {})",
        rows.len(),
        total,
        filters.sort.label().to_lowercase(),
    );
    if (rows.len() as i64) < total {
        log::info!("Use --pages to load more.");
    }

    Ok(())
}
