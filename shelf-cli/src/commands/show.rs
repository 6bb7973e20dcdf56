use std::path::PathBuf;

use shelf_lib::SeriesGateway;

use crate::CliError;

use super::{log_series, open_gateway, runtime};

pub(crate) fn run_show(db_path: Option<PathBuf>, id: i64, json: bool) -> Result<(), CliError> {
    let gateway = open_gateway(db_path)?;
    let series = runtime()?.block_on(gateway.fetch_one(id))?;

    if json {
        let out = serde_json::to_string_pretty(&series)
            .map_err(|e| CliError::runtime(format!("Failed to serialize series: {}", e)))?;
        println!("{out}");
    } else {
        log_series(&series);
    }
    Ok(())
}
