use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

use super::open_catalog;

pub(crate) fn run_seed(db_path: Option<PathBuf>, file: &Path) -> Result<(), CliError> {
    let seed = ludex_model::load_seed_file(file).map_err(|e| CliError::seed(e.to_string()))?;

    let conn = open_catalog(db_path)?;
    let stats = ludex_db::apply_seed(&conn, &seed)?;

    for reason in &stats.skipped {
        log::warn!("skipped {}", reason);
    }

    log::info!(
        "{}",
        "Seed applied".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Genres:  {:>6}", stats.genres);
    log::info!("  Games:   {:>6}", stats.games);
    if !stats.skipped.is_empty() {
        log::info!("  Skipped: {:>6}", stats.skipped.len());
    }
    Ok(())
}
