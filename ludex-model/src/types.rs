//! Data model types for the game catalog.
//!
//! These types represent the persistent catalog schema: games, genres, and
//! the patch shapes used for creation and partial update.

use serde::{Deserialize, Serialize};

// ── Genre ───────────────────────────────────────────────────────────────────

/// A classification tag for games.
///
/// Names are case-sensitive and globally unique; identity is exact string
/// match, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A catalog entry. The slug is the external lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// ISO date string (YYYY-MM-DD).
    pub release_date: Option<String>,
    pub cover_image_url: Option<String>,
    /// Passive store for an externally computed rating; never written by
    /// catalog updates.
    pub aggregated_rating: f64,
    /// Resolved genre set. No duplicates; order is not significant.
    pub genres: Vec<Genre>,
    pub created_at: String,
    pub updated_at: String,
}

/// Everything needed to create a new game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDraft {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Genre names to resolve at creation. Names without an existing genre
    /// record get one created.
    #[serde(default)]
    pub genres: Vec<String>,
}

// ── Partial updates ─────────────────────────────────────────────────────────

/// One nullable field of a partial update: left alone, cleared to NULL, or
/// set to a value.
///
/// A plain `Option` cannot distinguish "absent from the patch" from "set to
/// null", and that distinction decides whether a column is written at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Field absent from the patch; the stored value is untouched.
    #[default]
    Keep,
    /// Clear the stored value to NULL.
    Clear,
    /// Overwrite the stored value.
    Set(T),
}

impl<T> Field<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Field::Keep)
    }

    /// The new column value when the field is touched, `None` when kept.
    pub fn touched(&self) -> Option<Option<&T>> {
        match self {
            Field::Keep => None,
            Field::Clear => Some(None),
            Field::Set(v) => Some(Some(v)),
        }
    }
}

/// A partial update for a game. Every field defaults to untouched.
///
/// `slug` and `title` are required columns, so they are two-state (replace
/// or keep). `genres`, when present, names the complete replacement set for
/// the game's associations — an empty list clears every genre, while a
/// `None` leaves the existing set untouched.
#[derive(Debug, Clone, Default)]
pub struct GamePatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Field<String>,
    pub release_date: Field<String>,
    pub cover_image_url: Field<String>,
    pub genres: Option<Vec<String>>,
}

impl GamePatch {
    /// True when no field is touched; applying such a patch is a no-op apart
    /// from the `updated_at` refresh.
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.description.is_keep()
            && self.release_date.is_keep()
            && self.cover_image_url.is_keep()
            && self.genres.is_none()
    }
}

// ── Input validation helpers ────────────────────────────────────────────────

/// Check a slug against the allowed charset: lowercase ASCII letters,
/// digits, and hyphens, non-empty.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check a release date is a well-formed ISO date (YYYY-MM-DD).
pub fn is_valid_release_date(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_default_is_keep() {
        let f: Field<String> = Field::default();
        assert!(f.is_keep());
        assert_eq!(f.touched(), None);
    }

    #[test]
    fn field_touched_views() {
        assert_eq!(Field::<String>::Clear.touched(), Some(None));
        let set = Field::Set("x".to_string());
        assert_eq!(set.touched(), Some(Some(&"x".to_string())));
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(GamePatch::default().is_empty());
        let patch = GamePatch {
            genres: Some(vec![]),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn slug_charset() {
        assert!(is_valid_slug("hollow-knight"));
        assert!(is_valid_slug("portal2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Hollow Knight"));
        assert!(!is_valid_slug("héllo"));
    }

    #[test]
    fn release_date_format() {
        assert!(is_valid_release_date("2017-02-24"));
        assert!(!is_valid_release_date("24/02/2017"));
        assert!(!is_valid_release_date("2017-13-40"));
    }
}
