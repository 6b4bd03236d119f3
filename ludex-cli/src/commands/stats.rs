use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

use super::{default_db_path, open_catalog};

pub(crate) fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let shown_path = db_path.clone().unwrap_or_else(default_db_path);
    let conn = open_catalog(db_path)?;
    let stats = ludex_db::catalog_stats(&conn)?;

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", shown_path.display());
    crate::log_blank();
    log::info!("  Games:         {:>8}", stats.games);
    log::info!("  Genres:        {:>8}", stats.genres);
    log::info!("  Associations:  {:>8}", stats.associations);

    Ok(())
}
