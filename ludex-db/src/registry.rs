//! The genre registry: single source of truth for genre identity.
//!
//! Names are matched exactly, case-sensitive, and kept unique by the
//! database index. Create-if-absent goes through `ON CONFLICT DO NOTHING`
//! followed by a lookup, so two concurrent resolutions of the same new name
//! cannot both insert — the loser reads the winner's row.

use std::collections::HashSet;

use ludex_model::Genre;
use rusqlite::{params, Connection};

use crate::store::StoreError;

/// Resolve genre names to records, creating missing ones.
///
/// Duplicate names in the input collapse to a single record; an empty input
/// resolves to an empty set without touching the database.
pub fn resolve_genre_names(conn: &Connection, names: &[String]) -> Result<Vec<Genre>, StoreError> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            continue;
        }
        resolved.push(create_genre(conn, name)?);
    }
    Ok(resolved)
}

/// Create a genre, or return the existing record with this name.
pub fn create_genre(conn: &Connection, name: &str) -> Result<Genre, StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid("genre name must not be blank"));
    }

    conn.execute(
        "INSERT INTO genres (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
        params![name],
    )?;
    match find_genre_by_name(conn, name)? {
        Some(genre) => Ok(genre),
        // Only reachable if the row vanished between insert and lookup.
        None => Err(StoreError::not_found("genre", name)),
    }
}

/// Find a genre by exact name.
pub fn find_genre_by_name(conn: &Connection, name: &str) -> Result<Option<Genre>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM genres WHERE name = ?1")?;
    let result = stmt.query_row(params![name], row_to_genre);
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a genre, detaching it from every game that references it.
///
/// Detach and delete share one transaction; no game is left pointing at a
/// missing genre.
pub fn delete_genre(conn: &Connection, id: i64) -> Result<(), StoreError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM game_genres WHERE genre_id = ?1", params![id])?;
    let changed = tx.execute("DELETE FROM genres WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(StoreError::not_found("genre", id.to_string()));
    }
    tx.commit()?;
    Ok(())
}

/// List all genres, ordered by name.
pub fn list_genres(conn: &Connection) -> Result<Vec<Genre>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM genres ORDER BY name")?;
    let rows = stmt.query_map([], row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// A genre together with how many games reference it.
#[derive(Debug)]
pub struct GenreUsage {
    pub genre: Genre,
    pub game_count: i64,
}

/// List all genres with their game counts, ordered by name.
pub fn genres_with_counts(conn: &Connection) -> Result<Vec<GenreUsage>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.name, COUNT(gg.game_id)
         FROM genres g
         LEFT JOIN game_genres gg ON gg.genre_id = g.id
         GROUP BY g.id, g.name
         ORDER BY g.name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(GenreUsage {
            genre: Genre {
                id: row.get(0)?,
                name: row.get(1)?,
            },
            game_count: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn row_to_genre(row: &rusqlite::Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
