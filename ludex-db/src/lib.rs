//! SQLite persistence layer for the game catalog.
//!
//! Provides schema creation, game CRUD with partial updates, genre
//! resolution, and seed loading backed by SQLite (via rusqlite with
//! bundled feature).

pub use rusqlite;

pub mod registry;
pub mod schema;
pub mod seed;
pub mod store;

pub use registry::{
    create_genre, delete_genre, find_genre_by_name, genres_with_counts, list_genres,
    resolve_genre_names, GenreUsage,
};
pub use schema::{open_database, open_memory};
pub use seed::{apply_seed, SeedStats};
pub use store::{
    catalog_stats, create_game, delete_game, find_game_by_slug, list_games,
    set_aggregated_rating, update_game, CatalogStats, StoreError,
};
