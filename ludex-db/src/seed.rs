//! Seed loading: pre-populate a catalog database from a YAML seed file.
//!
//! Per-record conflicts (an existing slug, a blank name) are collected and
//! skipped rather than aborting the whole run; the caller decides how to
//! report them. Safe to apply the same seed file repeatedly.

use ludex_model::SeedFile;
use rusqlite::Connection;

use crate::registry::create_genre;
use crate::store::{create_game, set_aggregated_rating, StoreError};

/// Statistics from applying a seed file.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub genres: usize,
    pub games: usize,
    /// Human-readable reasons for each skipped record.
    pub skipped: Vec<String>,
}

/// Apply seed data to the database.
///
/// Genres resolve idempotently. Games whose slug already exists are skipped,
/// as are records the store rejects as invalid; any other failure aborts.
pub fn apply_seed(conn: &Connection, seed: &SeedFile) -> Result<SeedStats, StoreError> {
    let mut stats = SeedStats::default();

    for name in &seed.genres {
        match create_genre(conn, name) {
            Ok(_) => stats.genres += 1,
            Err(StoreError::InvalidInput(msg)) => {
                stats.skipped.push(format!("genre '{}': {}", name, msg));
            }
            Err(e) => return Err(e),
        }
    }

    for entry in &seed.games {
        match create_game(conn, &entry.to_draft()) {
            Ok(_) => {
                if entry.aggregated_rating != 0.0 {
                    set_aggregated_rating(conn, &entry.slug, entry.aggregated_rating)?;
                }
                stats.games += 1;
            }
            Err(StoreError::Conflict { .. }) => {
                stats
                    .skipped
                    .push(format!("game '{}': slug already exists", entry.slug));
            }
            Err(StoreError::InvalidInput(msg)) => {
                stats.skipped.push(format!("game '{}': {}", entry.slug, msg));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(stats)
}
