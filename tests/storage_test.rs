//! Integration tests for the tournament store public API

use swiss_tournament::{PlayerId, TournamentDatabase, TournamentError};

fn setup_tournament(names: &[&str]) -> (TournamentDatabase, Vec<PlayerId>) {
    let mut db = TournamentDatabase::open_in_memory().unwrap();
    let ids = names
        .iter()
        .map(|name| db.register_player(name).unwrap())
        .collect();
    (db, ids)
}

#[test]
fn test_full_tournament_round() {
    let (mut db, ids) = setup_tournament(&[
        "Twilight Sparkle",
        "Fluttershy",
        "Applejack",
        "Pinkie Pie",
    ]);
    assert_eq!(db.count_players().unwrap(), 4);

    // Round one
    db.report_match(ids[0], ids[1]).unwrap();
    db.report_match(ids[2], ids[3]).unwrap();

    let standings = db.standings().unwrap();
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|s| s.matches == 1));
    assert_eq!(
        standings.iter().map(|s| s.wins).collect::<Vec<_>>(),
        vec![1, 1, 0, 0]
    );

    // Round two pairings match winners against winners
    let pairings = db.pairings().unwrap();
    assert_eq!(pairings.len(), 2);
    assert_eq!(pairings[0].first_id, ids[0]);
    assert_eq!(pairings[0].second_id, ids[2]);
    assert_eq!(pairings[1].first_id, ids[1]);
    assert_eq!(pairings[1].second_id, ids[3]);
}

#[test]
fn test_clear_resets_tournament() {
    let (mut db, ids) = setup_tournament(&["Chandra Nalaar", "Jace Beleren"]);
    db.report_match(ids[0], ids[1]).unwrap();

    db.clear_matches().unwrap();
    db.clear_players().unwrap();

    assert_eq!(db.count_players().unwrap(), 0);
    assert!(db.standings().unwrap().is_empty());
    assert!(db.pairings().unwrap().is_empty());
}

#[test]
fn test_uneven_field_cannot_be_paired() {
    let (db, _ids) = setup_tournament(&["One", "Two", "Three", "Four", "Five"]);

    let error = db.pairings().unwrap_err();
    let tournament_error = error.downcast_ref::<TournamentError>();
    assert!(matches!(
        tournament_error,
        Some(TournamentError::UnevenPlayers { count: 5 })
    ));
}

#[test]
fn test_players_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tournament.db");

    let first_id;
    {
        let mut db = TournamentDatabase::open(&db_path).unwrap();
        first_id = db.register_player("Markov Chaney").unwrap();
        db.register_player("Joe Malik").unwrap();
    }

    let db = TournamentDatabase::open(&db_path).unwrap();
    assert_eq!(db.count_players().unwrap(), 2);

    let standings = db.standings().unwrap();
    assert_eq!(standings[0].id, first_id);
    assert_eq!(standings[0].name, "Markov Chaney");
}

#[test]
fn test_match_results_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tournament.db");

    {
        let mut db = TournamentDatabase::open(&db_path).unwrap();
        let winner = db.register_player("Bruno Walton").unwrap();
        let loser = db.register_player("Boots O'Neal").unwrap();
        db.report_match(winner, loser).unwrap();
    }

    let db = TournamentDatabase::open(&db_path).unwrap();
    let standings = db.standings().unwrap();
    assert_eq!(standings[0].name, "Bruno Walton");
    assert_eq!(standings[0].wins, 1);
    assert_eq!(standings[1].matches, 1);
}
