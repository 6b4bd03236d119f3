use ludex_db::*;
use ludex_model::GameDraft;

fn draft(slug: &str, genres: &[&str]) -> GameDraft {
    GameDraft {
        slug: slug.to_string(),
        title: slug.to_string(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn resolving_a_name_twice_returns_the_same_id() {
    let conn = open_memory().unwrap();
    let first = resolve_genre_names(&conn, &["Action".to_string()]).unwrap();
    let second = resolve_genre_names(&conn, &["Action".to_string()]).unwrap();
    assert_eq!(first[0].id, second[0].id);

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn duplicate_names_collapse_to_one_record() {
    let conn = open_memory().unwrap();
    let names = vec![
        "Action".to_string(),
        "Indie".to_string(),
        "Action".to_string(),
    ];
    let resolved = resolve_genre_names(&conn, &names).unwrap();
    assert_eq!(resolved.len(), 2);
    assert_ne!(resolved[0].id, resolved[1].id);
}

#[test]
fn empty_input_resolves_to_empty_set() {
    let conn = open_memory().unwrap();
    let resolved = resolve_genre_names(&conn, &[]).unwrap();
    assert!(resolved.is_empty());
}

#[test]
fn create_is_idempotent() {
    let conn = open_memory().unwrap();
    let a = create_genre(&conn, "RPG").unwrap();
    let b = create_genre(&conn, "RPG").unwrap();
    assert_eq!(a.id, b.id);
    assert_eq!(a.name, "RPG");
}

#[test]
fn names_are_case_sensitive() {
    let conn = open_memory().unwrap();
    let a = create_genre(&conn, "rpg").unwrap();
    let b = create_genre(&conn, "RPG").unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn blank_names_are_rejected() {
    let conn = open_memory().unwrap();
    assert!(matches!(
        create_genre(&conn, ""),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(matches!(
        create_genre(&conn, "   "),
        Err(StoreError::InvalidInput(_))
    ));
    assert!(matches!(
        resolve_genre_names(&conn, &["  ".to_string()]),
        Err(StoreError::InvalidInput(_))
    ));
}

#[test]
fn find_by_name_is_exact() {
    let conn = open_memory().unwrap();
    create_genre(&conn, "Puzzle").unwrap();
    assert!(find_genre_by_name(&conn, "Puzzle").unwrap().is_some());
    assert!(find_genre_by_name(&conn, "puzzle").unwrap().is_none());
}

#[test]
fn delete_detaches_genre_from_every_game() {
    let conn = open_memory().unwrap();
    let action = create_genre(&conn, "Action").unwrap();
    create_game(&conn, &draft("a", &["Action", "Indie"])).unwrap();
    create_game(&conn, &draft("b", &["Action"])).unwrap();

    delete_genre(&conn, action.id).unwrap();

    let a = find_game_by_slug(&conn, "a").unwrap();
    assert_eq!(a.genres.len(), 1);
    assert_eq!(a.genres[0].name, "Indie");
    let b = find_game_by_slug(&conn, "b").unwrap();
    assert!(b.genres.is_empty());

    let names: Vec<String> = list_genres(&conn)
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Indie"]);
}

#[test]
fn delete_missing_genre_is_not_found() {
    let conn = open_memory().unwrap();
    assert!(matches!(
        delete_genre(&conn, 999),
        Err(StoreError::NotFound { .. })
    ));
}

#[test]
fn list_is_ordered_by_name() {
    let conn = open_memory().unwrap();
    create_genre(&conn, "Strategy").unwrap();
    create_genre(&conn, "Action").unwrap();
    create_genre(&conn, "Indie").unwrap();

    let names: Vec<String> = list_genres(&conn)
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Action", "Indie", "Strategy"]);
}

#[test]
fn usage_counts_reference_games() {
    let conn = open_memory().unwrap();
    create_genre(&conn, "Lonely").unwrap();
    create_game(&conn, &draft("a", &["Action"])).unwrap();
    create_game(&conn, &draft("b", &["Action", "Indie"])).unwrap();

    let usage = genres_with_counts(&conn).unwrap();
    let counts: Vec<(String, i64)> = usage
        .into_iter()
        .map(|u| (u.genre.name, u.game_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Action".to_string(), 2),
            ("Indie".to_string(), 1),
            ("Lonely".to_string(), 0),
        ]
    );
}
