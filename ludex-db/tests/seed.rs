use ludex_db::*;
use ludex_model::{SeedFile, SeedGame};

fn sample_seed() -> SeedFile {
    SeedFile {
        genres: vec!["Action".to_string(), "Indie".to_string()],
        games: vec![
            SeedGame {
                slug: "hollow-knight".to_string(),
                title: "Hollow Knight".to_string(),
                description: None,
                release_date: Some("2017-02-24".to_string()),
                cover_image_url: None,
                genres: vec!["Action".to_string(), "Indie".to_string()],
                aggregated_rating: 9.4,
            },
            SeedGame {
                slug: "celeste".to_string(),
                title: "Celeste".to_string(),
                description: None,
                release_date: None,
                cover_image_url: None,
                genres: vec![],
                aggregated_rating: 0.0,
            },
        ],
    }
}

#[test]
fn seed_creates_genres_and_games() {
    let conn = open_memory().unwrap();
    let stats = apply_seed(&conn, &sample_seed()).unwrap();
    assert_eq!(stats.genres, 2);
    assert_eq!(stats.games, 2);
    assert!(stats.skipped.is_empty());

    let hk = find_game_by_slug(&conn, "hollow-knight").unwrap();
    assert_eq!(hk.genres.len(), 2);
    assert_eq!(hk.aggregated_rating, 9.4);
}

#[test]
fn reapplying_a_seed_skips_existing_games() {
    let conn = open_memory().unwrap();
    apply_seed(&conn, &sample_seed()).unwrap();
    let stats = apply_seed(&conn, &sample_seed()).unwrap();

    assert_eq!(stats.games, 0);
    assert_eq!(stats.skipped.len(), 2);
    // Genre creation stays idempotent, no duplicates.
    assert_eq!(list_genres(&conn).unwrap().len(), 2);
    assert_eq!(list_games(&conn).unwrap().len(), 2);
}

#[test]
fn invalid_records_are_skipped_not_fatal() {
    let conn = open_memory().unwrap();
    let mut seed = sample_seed();
    seed.genres.push("  ".to_string());
    seed.games[0].slug = String::new();

    let stats = apply_seed(&conn, &seed).unwrap();
    assert_eq!(stats.genres, 2);
    assert_eq!(stats.games, 1);
    assert_eq!(stats.skipped.len(), 2);
}
