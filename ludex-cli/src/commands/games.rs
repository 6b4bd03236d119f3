use std::path::PathBuf;

use ludex_model::{Field, Game, GameDraft, GamePatch};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::GameFieldArgs;

use super::{open_catalog, truncate_str};

/// Flags for `games update`, gathered so the clap arm stays readable.
pub(crate) struct UpdateArgs {
    pub(crate) new_slug: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) fields: GameFieldArgs,
    pub(crate) clear_description: bool,
    pub(crate) clear_release_date: bool,
    pub(crate) clear_cover_url: bool,
    pub(crate) genres: Option<Vec<String>>,
    pub(crate) no_genres: bool,
}

pub(crate) fn run_list(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    let games = ludex_db::list_games(&conn)?;

    if games.is_empty() {
        log::info!("No games in the catalog.");
        return Ok(());
    }

    for game in &games {
        let genre_names: Vec<&str> = game.genres.iter().map(|g| g.name.as_str()).collect();
        log::info!(
            "{:<24} {:<32} {}",
            game.slug.if_supports_color(Stdout, |t| t.bold()),
            truncate_str(&game.title, 32),
            genre_names.join(", "),
        );
    }
    crate::log_blank();
    log::info!("{} game(s)", games.len());
    Ok(())
}

pub(crate) fn run_show(db_path: Option<PathBuf>, slug: &str) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    let game = ludex_db::find_game_by_slug(&conn, slug)?;
    print_game(&game);
    Ok(())
}

pub(crate) fn run_add(
    db_path: Option<PathBuf>,
    slug: String,
    title: String,
    fields: GameFieldArgs,
    genres: Option<Vec<String>>,
) -> Result<(), CliError> {
    validate_slug(&slug)?;
    validate_title(&title)?;
    if let Some(date) = &fields.release_date {
        validate_release_date(date)?;
    }
    if let Some(url) = &fields.cover_url {
        validate_cover_url(url)?;
    }
    let genres = genres.unwrap_or_default();
    validate_genre_names(&genres)?;

    let conn = open_catalog(db_path)?;
    let draft = GameDraft {
        slug,
        title,
        description: fields.description,
        release_date: fields.release_date,
        cover_image_url: fields.cover_url,
        genres,
    };
    let game = ludex_db::create_game(&conn, &draft)?;

    log::info!(
        "Added {}",
        game.slug.if_supports_color(Stdout, |t| t.bold()),
    );
    print_game(&game);
    Ok(())
}

pub(crate) fn run_update(
    db_path: Option<PathBuf>,
    slug: &str,
    args: UpdateArgs,
) -> Result<(), CliError> {
    let patch = build_patch(args)?;
    if patch.is_empty() {
        return Err(CliError::invalid_input("no fields to update"));
    }

    let conn = open_catalog(db_path)?;
    let game = ludex_db::update_game(&conn, slug, &patch)?;

    log::info!(
        "Updated {}",
        game.slug.if_supports_color(Stdout, |t| t.bold()),
    );
    print_game(&game);
    Ok(())
}

pub(crate) fn run_rm(db_path: Option<PathBuf>, slug: &str) -> Result<(), CliError> {
    let conn = open_catalog(db_path)?;
    ludex_db::delete_game(&conn, slug)?;
    log::info!("Removed {}", slug.if_supports_color(Stdout, |t| t.bold()));
    Ok(())
}

/// Translate update flags into the store's patch shape, validating each
/// touched field. Clear flags beat nothing; clap already rejects passing a
/// set and its clear together.
fn build_patch(args: UpdateArgs) -> Result<GamePatch, CliError> {
    if let Some(new_slug) = &args.new_slug {
        validate_slug(new_slug)?;
    }
    if let Some(title) = &args.title {
        validate_title(title)?;
    }
    if let Some(date) = &args.fields.release_date {
        validate_release_date(date)?;
    }
    if let Some(url) = &args.fields.cover_url {
        validate_cover_url(url)?;
    }

    let genres = if args.no_genres {
        Some(Vec::new())
    } else {
        args.genres
    };
    if let Some(names) = &genres {
        validate_genre_names(names)?;
    }

    Ok(GamePatch {
        slug: args.new_slug,
        title: args.title,
        description: tri_state(args.fields.description, args.clear_description),
        release_date: tri_state(args.fields.release_date, args.clear_release_date),
        cover_image_url: tri_state(args.fields.cover_url, args.clear_cover_url),
        genres,
    })
}

fn tri_state(value: Option<String>, clear: bool) -> Field<String> {
    match (value, clear) {
        (Some(v), _) => Field::Set(v),
        (None, true) => Field::Clear,
        (None, false) => Field::Keep,
    }
}

// ── Input validation (shape checks live here, not in the store) ─────────────

fn validate_slug(slug: &str) -> Result<(), CliError> {
    if !ludex_model::is_valid_slug(slug) {
        return Err(CliError::invalid_input(format!(
            "slug '{}' may only contain lowercase letters, digits, and hyphens",
            slug
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), CliError> {
    if title.trim().is_empty() {
        return Err(CliError::invalid_input("title must not be blank"));
    }
    Ok(())
}

fn validate_release_date(date: &str) -> Result<(), CliError> {
    if !ludex_model::is_valid_release_date(date) {
        return Err(CliError::invalid_input(format!(
            "release date '{}' is not a valid YYYY-MM-DD date",
            date
        )));
    }
    Ok(())
}

fn validate_cover_url(url: &str) -> Result<(), CliError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::invalid_input(format!(
            "cover URL '{}' must start with http:// or https://",
            url
        )));
    }
    Ok(())
}

fn validate_genre_names(names: &[String]) -> Result<(), CliError> {
    for name in names {
        if name.trim().is_empty() {
            return Err(CliError::invalid_input("genre names must not be blank"));
        }
    }
    Ok(())
}

fn print_game(game: &Game) {
    crate::log_blank();
    log::info!(
        "{}  ({})",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        game.slug,
    );
    if let Some(desc) = &game.description {
        log::info!("  {}", truncate_str(desc, 76));
    }
    if let Some(date) = &game.release_date {
        log::info!("  Released:  {}", date);
    }
    if let Some(url) = &game.cover_image_url {
        log::info!("  Cover:     {}", url);
    }
    if game.aggregated_rating != 0.0 {
        log::info!("  Rating:    {:.1}", game.aggregated_rating);
    }
    let genre_names: Vec<&str> = game.genres.iter().map(|g| g.name.as_str()).collect();
    if genre_names.is_empty() {
        log::info!("  Genres:    (none)");
    } else {
        log::info!("  Genres:    {}", genre_names.join(", "));
    }
}
