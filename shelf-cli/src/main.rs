//! shelf CLI
//!
//! Command-line interface for browsing and editing a personal manga and
//! light novel catalog.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_set_db, run_config_show};
use commands::delete::{run_delete, run_reset};
use commands::edit::{run_add, run_edit};
use commands::list::run_list;
use commands::show::run_show;
use commands::stats::run_stats;
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    let db = cli.db;
    let result = match cli.command {
        Commands::List { browse, pages } => run_list(db, browse, pages),
        Commands::Show { id, json } => run_show(db, id, json),
        Commands::Add { fields } => run_add(db, fields),
        Commands::Edit { id, fields } => run_edit(db, id, fields),
        Commands::Delete { id, confirm } => run_delete(db, id, confirm),
        Commands::Reset { confirm } => run_reset(db, confirm),
        Commands::Stats => run_stats(db),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::Show => {
                run_config_show(db);
                Ok(())
            }
            ConfigAction::SetDb { path } => run_config_set_db(path),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
