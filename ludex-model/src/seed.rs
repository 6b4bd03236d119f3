//! YAML loading for human-curated seed data.
//!
//! A seed file lists genres and games to pre-populate a catalog database
//! with. Loading is pure parsing; conflict policy (skip, log) lives with
//! the database layer.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::GameDraft;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
}

/// A seed file: genre names plus game entries.
///
/// ```text
/// genres:
///   - Action
///   - Indie
/// games:
///   - slug: hollow-knight
///     title: Hollow Knight
///     release_date: "2017-02-24"
///     genres: [Action, Indie]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub games: Vec<SeedGame>,
}

/// A game entry in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGame {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub aggregated_rating: f64,
}

impl SeedGame {
    /// The creation draft for this entry (everything but the rating).
    pub fn to_draft(&self) -> GameDraft {
        GameDraft {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            release_date: self.release_date.clone(),
            cover_image_url: self.cover_image_url.clone(),
            genres: self.genres.clone(),
        }
    }
}

/// Load a single YAML seed file.
pub fn load_seed_file(path: &Path) -> Result<SeedFile, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|e| SeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| SeedError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
