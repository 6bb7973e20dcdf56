use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::{SeriesDraft, SeriesGateway};

use crate::CliError;
use crate::cli_types::SeriesFields;

use super::{log_series, open_gateway, runtime};

/// Overwrite the draft fields that were given on the command line.
pub(crate) fn apply_fields(draft: &mut SeriesDraft, fields: SeriesFields) {
    if let Some(v) = fields.title_en {
        draft.title_en = v;
    }
    if let Some(v) = fields.title_jp {
        draft.title_jp = v;
    }
    if let Some(v) = fields.description {
        draft.description = v;
    }
    if let Some(v) = fields.book_type {
        draft.book_type = v;
    }
    if let Some(v) = fields.author_status {
        draft.author_status = v;
    }
    if let Some(v) = fields.total_volumes {
        draft.total_volumes = v;
    }
    if let Some(v) = fields.wishlist {
        draft.is_on_wishlist = v;
    }
    if let Some(v) = fields.user_status {
        draft.user_status = v;
    }
    if let Some(v) = fields.volumes_owned {
        draft.volumes_owned = v;
    }
    if let Some(v) = fields.priority {
        draft.priority = v;
    }
    if let Some(v) = fields.rating {
        draft.rating = v;
    }
    if let Some(v) = fields.notes {
        draft.notes = v;
    }
}

pub(crate) fn run_add(db_path: Option<PathBuf>, fields: SeriesFields) -> Result<(), CliError> {
    let mut draft = SeriesDraft::new();
    apply_fields(&mut draft, fields);
    let mut series = draft.into_new_series()?;

    let gateway = open_gateway(db_path)?;
    let id = runtime()?.block_on(gateway.insert(&series))?;
    series.id = id;

    log::info!("{}", "Series added.".if_supports_color(Stdout, |t| t.green()));
    log_series(&series);
    Ok(())
}

pub(crate) fn run_edit(
    db_path: Option<PathBuf>,
    id: i64,
    fields: SeriesFields,
) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    let rt = runtime()?;

    let existing = rt.block_on(gateway.fetch_one(id))?;
    let mut draft = SeriesDraft::from_series(&existing);
    apply_fields(&mut draft, fields);
    let updated = draft.into_updated_series(existing.id, existing.primary_language)?;

    if updated == existing {
        log::info!("Nothing to change.");
        return Ok(());
    }
    rt.block_on(gateway.update(&updated))?;

    log::info!("{}", "Series updated.".if_supports_color(Stdout, |t| t.green()));
    log_series(&updated);
    Ok(())
}
