//! ludex CLI
//!
//! Command-line interface for managing a game catalog: games with unique
//! slugs, genres resolved by name, and the associations between them.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;
mod error;

use commands::{games, genres, seed, stats};

#[derive(Parser)]
#[command(name = "ludex")]
#[command(about = "Manage a game catalog", long_about = None)]
struct Cli {
    /// Path to the catalog database (default: platform data dir, or $LUDEX_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage games
    Games {
        #[command(subcommand)]
        action: GamesAction,
    },

    /// Manage genres
    Genres {
        #[command(subcommand)]
        action: GenresAction,
    },

    /// Load genres and games from a YAML seed file
    Seed {
        /// Seed file path
        file: PathBuf,
    },

    /// Show catalog statistics
    Stats,
}

#[derive(Subcommand)]
enum GamesAction {
    /// List all games
    List,

    /// Show one game by slug
    Show {
        /// Game slug
        slug: String,
    },

    /// Add a game
    Add {
        /// Slug (lowercase letters, digits, hyphens)
        slug: String,

        /// Game title
        #[arg(short, long)]
        title: String,

        #[command(flatten)]
        fields: GameFieldArgs,

        /// Genre names (e.g., Action,Indie); missing genres are created
        #[arg(short, long, value_delimiter = ',')]
        genres: Option<Vec<String>>,
    },

    /// Update a game; only the flags you pass are applied
    Update {
        /// Game slug
        slug: String,

        /// Change the slug itself (the old one becomes reusable)
        #[arg(long)]
        new_slug: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        fields: GameFieldArgs,

        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,

        /// Remove the release date
        #[arg(long, conflicts_with = "release_date")]
        clear_release_date: bool,

        /// Remove the cover image URL
        #[arg(long, conflicts_with = "cover_url")]
        clear_cover_url: bool,

        /// Replace the genre set (e.g., Action,Indie)
        #[arg(short, long, value_delimiter = ',')]
        genres: Option<Vec<String>>,

        /// Remove every genre from this game
        #[arg(long, conflicts_with = "genres")]
        no_genres: bool,
    },

    /// Remove a game (genre records are kept)
    Rm {
        /// Game slug
        slug: String,
    },
}

/// Optional descriptive fields shared by add and update.
#[derive(Args, Clone)]
pub(crate) struct GameFieldArgs {
    /// Description text
    #[arg(short, long)]
    pub(crate) description: Option<String>,

    /// Release date (YYYY-MM-DD)
    #[arg(short, long)]
    pub(crate) release_date: Option<String>,

    /// Cover image URL
    #[arg(short, long)]
    pub(crate) cover_url: Option<String>,
}

#[derive(Subcommand)]
enum GenresAction {
    /// List all genres with usage counts
    List,

    /// Add a genre (returns the existing one if the name is taken)
    Add {
        /// Genre name, case-sensitive
        name: String,
    },

    /// Remove a genre by id, detaching it from every game
    Rm {
        /// Genre id (see `genres list`)
        id: i64,
    },
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Games { action } => match action {
            GamesAction::List => games::run_list(cli.db),
            GamesAction::Show { slug } => games::run_show(cli.db, &slug),
            GamesAction::Add {
                slug,
                title,
                fields,
                genres,
            } => games::run_add(cli.db, slug, title, fields, genres),
            GamesAction::Update {
                slug,
                new_slug,
                title,
                fields,
                clear_description,
                clear_release_date,
                clear_cover_url,
                genres,
                no_genres,
            } => games::run_update(
                cli.db,
                &slug,
                games::UpdateArgs {
                    new_slug,
                    title,
                    fields,
                    clear_description,
                    clear_release_date,
                    clear_cover_url,
                    genres,
                    no_genres,
                },
            ),
            GamesAction::Rm { slug } => games::run_rm(cli.db, &slug),
        },
        Commands::Genres { action } => match action {
            GenresAction::List => genres::run_list(cli.db),
            GenresAction::Add { name } => genres::run_add(cli.db, &name),
            GenresAction::Rm { id } => genres::run_rm(cli.db, id),
        },
        Commands::Seed { file } => seed::run_seed(cli.db, &file),
        Commands::Stats => stats::run_stats(cli.db),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Plain-message logger: info lines go out bare, warnings and errors get a
/// level prefix. `RUST_LOG` overrides the default Info filter.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        })
        .init();
}

/// Emit a blank line through the logger so output stays ordered.
pub(crate) fn log_blank() {
    log::info!("");
}
