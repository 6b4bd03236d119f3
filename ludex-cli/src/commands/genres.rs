use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

use super::open_catalog;

pub(crate) fn run_list(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    let usage = ludex_db::genres_with_counts(&conn)?;

    if usage.is_empty() {
        log::info!("No genres in the catalog.");
        return Ok(());
    }

    log::info!("{:>6}  {:<24} {}", "id", "name", "games");
    for entry in &usage {
        log::info!(
            "{:>6}  {:<24} {}",
            entry.genre.id,
            entry.genre.name.if_supports_color(Stdout, |t| t.bold()),
            entry.game_count,
        );
    }
    Ok(())
}

pub(crate) fn run_add(db_path: Option<PathBuf>, name: &str) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    let genre = ludex_db::create_genre(&conn, name)?;
    log::info!(
        "Genre {} (id {})",
        genre.name.if_supports_color(Stdout, |t| t.bold()),
        genre.id,
    );
    Ok(())
}

pub(crate) fn run_rm(db_path: Option<PathBuf>, id: i64) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    ludex_db::delete_genre(&conn, id)?;
    log::info!("Removed genre {}", id);
    Ok(())
}
