//! Deterministic fixture data for the events store.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;

const EVENT_COUNT: i64 = 100;
const RNG_SEED: u64 = 0x73706f727473;

const TEAMS: &[&str] = &[
    "Harbour City Hawks",
    "Westgate Wolves",
    "Northbank Titans",
    "Redhill Rovers",
    "Lakeside Lions",
    "Eastfield Eagles",
    "Southport Sharks",
    "Greyfriars Giants",
];

const SPORTS: &[&str] = &["Rugby", "Soccer", "Basketball", "Cricket", "Netball"];

const COMPETITIONS: &[&str] = &[
    "Premier League",
    "National Cup",
    "Coastal Conference",
    "Highlands Shield",
    "Metro Championship",
];

pub(super) fn seed_events(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS sports (id INTEGER PRIMARY KEY, name TEXT, advertised_start_time DATETIME, sport TEXT, home_team TEXT, away_team TEXT, competition_id INTEGER, competition_name TEXT)",
        [],
    )?;

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let now = Utc::now();

    for id in 1..=EVENT_COUNT {
        let home_team = TEAMS[rng.gen_range(0..TEAMS.len())];
        let away_team = TEAMS[rng.gen_range(0..TEAMS.len())];
        let competition = rng.gen_range(0..COMPETITIONS.len());
        let advertised_start = now + Duration::minutes(rng.gen_range(-24 * 60..=2 * 24 * 60));

        conn.execute(
            "INSERT OR IGNORE INTO sports(id, name, advertised_start_time, sport, home_team, away_team, competition_id, competition_name) VALUES (?,?,?,?,?,?,?,?)",
            rusqlite::params![
                id,
                format!("{home_team} vs {away_team}"),
                advertised_start.to_rfc3339(),
                SPORTS[rng.gen_range(0..SPORTS.len())],
                home_team,
                away_team,
                competition as i64 + 1,
                COMPETITIONS[competition],
            ],
        )?;
    }

    Ok(())
}
