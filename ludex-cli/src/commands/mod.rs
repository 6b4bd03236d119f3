pub(crate) mod games;
pub(crate) mod genres;
pub(crate) mod seed;
pub(crate) mod stats;

use std::path::PathBuf;

use ludex_db::rusqlite::Connection;

use crate::error::CliError;

/// Default path for the catalog database: `$LUDEX_DB` if set, otherwise
/// `ludex/catalog.db` under the platform data directory.
pub(crate) fn default_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("LUDEX_DB") {
        return PathBuf::from(path);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ludex")
        .join("catalog.db")
}

/// Open (creating if needed) the catalog database for a command.
pub(crate) fn open_catalog(db_path: Option<PathBuf>) -> Result<Connection, CliError> {
    let db_path = db_path.unwrap_or_else(default_db_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    ludex_db::open_database(&db_path)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))
}

/// Truncate a string to a maximum width, appending "..." if needed.
///
/// The cut backs up to a char boundary so multibyte titles can't split a
/// character mid-sequence.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let (keep, ellipsis) = if max > 3 { (max - 3, "...") } else { (max, "") };
    let mut cut = keep;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}{}", &s[..cut], ellipsis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_str("Celeste", 32), "Celeste");
    }

    #[test]
    fn long_ascii_titles_get_an_ellipsis() {
        assert_eq!(truncate_str("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn multibyte_titles_cut_on_a_char_boundary() {
        let title = "ファイナルファンタジーXIVオンライン完全版セット";
        let out = truncate_str(title, 32);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 32);
        assert_eq!(truncate_str("Pokémon Écarlate édition spéciale", 20), "Pokémon Écarlat...");
    }

    #[test]
    fn tiny_widths_do_not_panic() {
        assert_eq!(truncate_str("abcdef", 3), "abc");
        let out = truncate_str("日本語タイトル", 2);
        assert!(out.len() <= 2);
    }
}
