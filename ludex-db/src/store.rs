//! Game CRUD operations: creation, lookup by slug, partial update, delete.
//!
//! Games own their genre associations; the join rows are written here and
//! resolved through [`crate::registry`]. Slug uniqueness is enforced by the
//! database index, so a lost creation race surfaces as a conflict rather
//! than a duplicate.

use ludex_model::{Game, GameDraft, GamePatch, Genre};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::registry::resolve_genre_names;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{entity} not found: '{key}'")]
    NotFound { entity: &'static str, key: String },
    #[error("{field} already in use: '{value}'")]
    Conflict { field: &'static str, value: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Map a unique-index violation to a conflict on the given field,
    /// passing any other SQLite error through.
    pub(crate) fn from_unique_violation(
        err: rusqlite::Error,
        field: &'static str,
        value: &str,
    ) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Conflict {
                    field,
                    value: value.to_string(),
                }
            }
            _ => Self::Sqlite(err),
        }
    }
}

// ── Creation ────────────────────────────────────────────────────────────────

/// Create a game with its initial (possibly empty) genre set.
///
/// Genre names are resolved through the registry inside the same
/// transaction; missing genres are created. Returns the stored game with
/// genres populated. Fails with [`StoreError::Conflict`] if the slug is
/// already taken.
pub fn create_game(conn: &Connection, draft: &GameDraft) -> Result<Game, StoreError> {
    if draft.slug.trim().is_empty() {
        return Err(StoreError::invalid("game slug must not be blank"));
    }
    if draft.title.trim().is_empty() {
        return Err(StoreError::invalid("game title must not be blank"));
    }

    let tx = conn.unchecked_transaction()?;

    tx.execute(
        "INSERT INTO games (slug, title, description, release_date, cover_image_url)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.slug,
            draft.title,
            draft.description,
            draft.release_date,
            draft.cover_image_url,
        ],
    )
    .map_err(|e| StoreError::from_unique_violation(e, "slug", &draft.slug))?;
    let game_id = tx.last_insert_rowid();

    let genres = resolve_genre_names(&tx, &draft.genres)?;
    replace_associations(&tx, game_id, &genres)?;

    let game = get_game(&tx, game_id)?;
    tx.commit()?;
    Ok(game)
}

// ── Lookup ──────────────────────────────────────────────────────────────────

/// Find a game by slug, with its genre set populated.
pub fn find_game_by_slug(conn: &Connection, slug: &str) -> Result<Game, StoreError> {
    let id = game_id_for_slug(conn, slug)?;
    get_game(conn, id)
}

/// List all games with genre sets populated, ordered by slug.
pub fn list_games(conn: &Connection) -> Result<Vec<Game>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, description, release_date, cover_image_url,
                aggregated_rating, created_at, updated_at
         FROM games ORDER BY slug",
    )?;
    let rows = stmt.query_map([], row_to_game)?;
    let mut games = rows.collect::<Result<Vec<_>, _>>()?;
    for game in &mut games {
        game.genres = genres_for_game(conn, game.id)?;
    }
    Ok(games)
}

// ── Partial update ──────────────────────────────────────────────────────────

/// Apply a partial update to the game with the given slug.
///
/// Only touched fields are written; everything else keeps its stored value.
/// A `genres` list in the patch — even an empty one — replaces the whole
/// association set; an absent list leaves it alone. The read and the write
/// share one transaction, so a concurrent delete yields NotFound instead of
/// resurrecting the row.
pub fn update_game(conn: &Connection, slug: &str, patch: &GamePatch) -> Result<Game, StoreError> {
    let tx = conn.unchecked_transaction()?;

    let current = find_game_row(&tx, slug)?.ok_or_else(|| StoreError::not_found("game", slug))?;

    let new_slug = patch.slug.as_deref().unwrap_or(&current.slug);
    let new_title = patch.title.as_deref().unwrap_or(&current.title);
    if new_slug.trim().is_empty() {
        return Err(StoreError::invalid("game slug must not be blank"));
    }
    if new_title.trim().is_empty() {
        return Err(StoreError::invalid("game title must not be blank"));
    }
    let new_description = match patch.description.touched() {
        Some(v) => v.cloned(),
        None => current.description.clone(),
    };
    let new_release_date = match patch.release_date.touched() {
        Some(v) => v.cloned(),
        None => current.release_date.clone(),
    };
    let new_cover = match patch.cover_image_url.touched() {
        Some(v) => v.cloned(),
        None => current.cover_image_url.clone(),
    };

    tx.execute(
        "UPDATE games
         SET slug = ?2, title = ?3, description = ?4, release_date = ?5,
             cover_image_url = ?6, updated_at = datetime('now')
         WHERE id = ?1",
        params![
            current.id,
            new_slug,
            new_title,
            new_description,
            new_release_date,
            new_cover,
        ],
    )
    .map_err(|e| StoreError::from_unique_violation(e, "slug", new_slug))?;

    if let Some(names) = &patch.genres {
        let genres = resolve_genre_names(&tx, names)?;
        replace_associations(&tx, current.id, &genres)?;
    }

    let game = get_game(&tx, current.id)?;
    tx.commit()?;
    Ok(game)
}

/// Overwrite a game's aggregated rating. The catalog never computes this
/// value itself; it is written by seeding or an external aggregator.
pub fn set_aggregated_rating(conn: &Connection, slug: &str, rating: f64) -> Result<(), StoreError> {
    let changed = conn.execute(
        "UPDATE games SET aggregated_rating = ?2, updated_at = datetime('now') WHERE slug = ?1",
        params![slug, rating],
    )?;
    if changed == 0 {
        return Err(StoreError::not_found("game", slug));
    }
    Ok(())
}

// ── Deletion ────────────────────────────────────────────────────────────────

/// Delete a game and its association rows. Genre records are untouched.
pub fn delete_game(conn: &Connection, slug: &str) -> Result<(), StoreError> {
    let changed = conn.execute("DELETE FROM games WHERE slug = ?1", params![slug])?;
    if changed == 0 {
        return Err(StoreError::not_found("game", slug));
    }
    Ok(())
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, StoreError> {
    let games: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |r| r.get(0))?;
    let genres: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
    let associations: i64 = conn.query_row("SELECT COUNT(*) FROM game_genres", [], |r| r.get(0))?;

    Ok(CatalogStats {
        games,
        genres,
        associations,
    })
}

/// Summary statistics for the catalog.
#[derive(Debug)]
pub struct CatalogStats {
    pub games: i64,
    pub genres: i64,
    pub associations: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn game_id_for_slug(conn: &Connection, slug: &str) -> Result<i64, StoreError> {
    let result = conn.query_row(
        "SELECT id FROM games WHERE slug = ?1",
        params![slug],
        |row| row.get::<_, i64>(0),
    );
    match result {
        Ok(id) => Ok(id),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::not_found("game", slug)),
        Err(e) => Err(e.into()),
    }
}

fn find_game_row(conn: &Connection, slug: &str) -> Result<Option<Game>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, description, release_date, cover_image_url,
                aggregated_rating, created_at, updated_at
         FROM games WHERE slug = ?1",
    )?;
    let result = stmt.query_row(params![slug], row_to_game);
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a game by rowid with its genre set populated.
pub(crate) fn get_game(conn: &Connection, id: i64) -> Result<Game, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, slug, title, description, release_date, cover_image_url,
                aggregated_rating, created_at, updated_at
         FROM games WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_game);
    let mut game = match result {
        Ok(g) => g,
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            return Err(StoreError::not_found("game", id.to_string()));
        }
        Err(e) => return Err(e.into()),
    };
    game.genres = genres_for_game(conn, game.id)?;
    Ok(game)
}

/// Load the genre set for a game, ordered by name for stable output.
pub(crate) fn genres_for_game(conn: &Connection, game_id: i64) -> Result<Vec<Genre>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT g.id, g.name FROM genres g
         JOIN game_genres gg ON gg.genre_id = g.id
         WHERE gg.game_id = ?1 ORDER BY g.name",
    )?;
    let rows = stmt.query_map(params![game_id], |row| {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Replace a game's association rows with the given resolved set.
fn replace_associations(
    conn: &Connection,
    game_id: i64,
    genres: &[Genre],
) -> Result<(), StoreError> {
    conn.execute(
        "DELETE FROM game_genres WHERE game_id = ?1",
        params![game_id],
    )?;
    for genre in genres {
        conn.execute(
            "INSERT OR IGNORE INTO game_genres (game_id, genre_id) VALUES (?1, ?2)",
            params![game_id, genre.id],
        )?;
    }
    Ok(())
}

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        slug: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        release_date: row.get(4)?,
        cover_image_url: row.get(5)?,
        aggregated_rating: row.get(6)?,
        genres: Vec::new(),
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}
