use chrono::{DateTime, Duration, Utc};
use racing::db::{self, RacesRepo};
use rusqlite::Connection;
use std::sync::Arc;
use std::thread;

/// Builds a repository over an in-memory store with hand-crafted rows.
///
/// The table deliberately has no primary key so pathological fixtures
/// (duplicate IDs) can be expressed.
fn repo_with(rows: &[(i64, i64, &str, i64, bool, DateTime<Utc>)]) -> RacesRepo {
    let conn = Connection::open_in_memory().expect("open in-memory store");
    conn.execute(
        "CREATE TABLE races (id INTEGER, meeting_id INTEGER, name TEXT, number INTEGER, visible INTEGER, advertised_start_time DATETIME)",
        [],
    )
    .expect("create races table");

    for (id, meeting_id, name, number, visible, start) in rows {
        conn.execute(
            "INSERT INTO races(id, meeting_id, name, number, visible, advertised_start_time) VALUES (?,?,?,?,?,?)",
            rusqlite::params![id, meeting_id, name, number, visible, start.to_rfc3339()],
        )
        .expect("insert race fixture");
    }

    RacesRepo::new(conn)
}

#[test]
fn list_returns_closed_then_open_in_default_order() {
    let now = Utc::now();
    let repo = repo_with(&[
        (2, 1, "Future race", 2, true, now + Duration::hours(1)),
        (1, 1, "Past race", 1, true, now - Duration::hours(1)),
    ]);

    let races = repo.list(None, None).expect("list races");

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].id, 1);
    assert_eq!(races[0].status, "CLOSED");
    assert_eq!(races[1].id, 2);
    assert_eq!(races[1].status, "OPEN");
}

#[test]
fn desc_order_reverses_regardless_of_case() {
    let now = Utc::now();
    let rows = [
        (1, 1, "Early", 1, true, now - Duration::hours(2)),
        (2, 1, "Middle", 2, true, now - Duration::hours(1)),
        (3, 1, "Late", 3, true, now + Duration::hours(1)),
    ];

    for token in ["desc", "DESC", "Desc"] {
        let repo = repo_with(&rows);
        let races = repo.list(None, Some(token)).expect("list races");
        let ids: Vec<i64> = races.iter().map(|race| race.id).collect();
        assert_eq!(ids, vec![3, 2, 1], "token {token:?} should sort descending");
    }
}

#[test]
fn meeting_id_filter_restricts_results() {
    let now = Utc::now();
    let repo = repo_with(&[
        (1, 5, "A", 1, true, now + Duration::hours(1)),
        (2, 6, "B", 2, true, now + Duration::hours(2)),
        (3, 5, "C", 3, true, now + Duration::hours(3)),
    ]);

    let filter = racing::proto::ListRacesRequestFilter {
        meeting_ids: vec![5],
        visible: None,
    };
    let races = repo.list(Some(&filter), None).expect("list races");

    let ids: Vec<i64> = races.iter().map(|race| race.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn visible_filter_matches_exactly() {
    let now = Utc::now();
    let repo = repo_with(&[
        (1, 1, "Shown", 1, true, now + Duration::hours(1)),
        (2, 1, "Hidden", 2, false, now + Duration::hours(2)),
    ]);

    let filter = racing::proto::ListRacesRequestFilter {
        meeting_ids: vec![],
        visible: Some(false),
    };
    let races = repo.list(Some(&filter), None).expect("list races");

    assert_eq!(races.len(), 1);
    assert_eq!(races[0].id, 2);
}

#[test]
fn filter_matching_nothing_returns_empty_list_without_error() {
    let now = Utc::now();
    let repo = repo_with(&[(1, 1, "Only", 1, true, now)]);

    let filter = racing::proto::ListRacesRequestFilter {
        meeting_ids: vec![99],
        visible: None,
    };
    let races = repo.list(Some(&filter), None).expect("list races");

    assert!(races.is_empty());
}

#[test]
fn get_returns_single_match() {
    let now = Utc::now();
    let repo = repo_with(&[
        (1, 1, "First", 1, true, now - Duration::hours(1)),
        (2, 1, "Second", 2, true, now + Duration::hours(1)),
    ]);

    let race = repo.get(2).expect("get race").expect("race should exist");

    assert_eq!(race.id, 2);
    assert_eq!(race.name, "Second");
    assert_eq!(race.status, "OPEN");
}

#[test]
fn get_returns_none_for_missing_id() {
    let repo = repo_with(&[(1, 1, "Only", 1, true, Utc::now())]);

    assert!(repo.get(42).expect("get race").is_none());
}

#[test]
fn get_returns_none_for_duplicate_ids() {
    let now = Utc::now();
    let repo = repo_with(&[
        (7, 1, "Copy A", 1, true, now),
        (7, 2, "Copy B", 2, true, now),
    ]);

    assert!(repo.get(7).expect("get race").is_none());
}

#[test]
fn malformed_stored_timestamp_aborts_the_whole_read() {
    let conn = Connection::open_in_memory().expect("open in-memory store");
    conn.execute(
        "CREATE TABLE races (id INTEGER, meeting_id INTEGER, name TEXT, number INTEGER, visible INTEGER, advertised_start_time DATETIME)",
        [],
    )
    .expect("create races table");
    conn.execute(
        "INSERT INTO races VALUES (1, 1, 'Good', 1, 1, ?)",
        [Utc::now().to_rfc3339()],
    )
    .expect("insert good row");
    conn.execute("INSERT INTO races VALUES (2, 1, 'Bad', 2, 1, 'garbage')", [])
        .expect("insert bad row");

    let repo = RacesRepo::new(conn);

    assert!(repo.list(None, None).is_err(), "no partial results on a conversion error");
}

#[test]
fn every_listed_race_carries_a_status() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("racing.db");

    let repo = RacesRepo::new(db::open(&path).expect("open store"));
    repo.init().expect("seed store");

    let races = repo.list(None, None).expect("list races");
    assert!(!races.is_empty());
    assert!(races
        .iter()
        .all(|race| race.status == "OPEN" || race.status == "CLOSED"));
    assert!(races.iter().all(|race| race.advertised_start_time.is_some()));
}

#[test]
fn concurrent_init_seeds_exactly_once() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("racing.db");

    let repo = Arc::new(RacesRepo::new(db::open(&path).expect("open store")));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || repo.init())
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().expect("init should succeed");
    }

    let count_after_racing_inits = count_races(&path);

    // A second repository over the same file reruns the seed; the
    // idempotent inserts must not add rows.
    let again = RacesRepo::new(db::open(&path).expect("reopen store"));
    again.init().expect("reseed store");

    assert_eq!(count_after_racing_inits, count_races(&path));
    assert_eq!(count_after_racing_inits, 100);
}

fn count_races(path: &std::path::Path) -> i64 {
    let conn = Connection::open(path).expect("open counting connection");
    conn.query_row("SELECT COUNT(*) FROM races", [], |row| row.get(0))
        .expect("count races")
}
