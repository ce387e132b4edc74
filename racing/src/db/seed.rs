//! Deterministic fixture data for the races store.
//!
//! Inserts are keyed by ID and use `INSERT OR IGNORE`, so reseeding an
//! already-populated store changes nothing.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;

const RACE_COUNT: i64 = 100;
const MEETING_COUNT: i64 = 10;
const RNG_SEED: u64 = 0x7261636573;

const SILKS: &[&str] = &[
    "Crimson", "Sapphire", "Golden", "Ivory", "Emerald", "Scarlet", "Midnight", "Silver",
];

const STAKES: &[&str] = &[
    "Sprint", "Handicap", "Stakes", "Plate", "Cup", "Classic", "Derby", "Trial",
];

pub(super) fn seed_races(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS races (id INTEGER PRIMARY KEY, meeting_id INTEGER, name TEXT, number INTEGER, visible INTEGER, advertised_start_time DATETIME)",
        [],
    )?;

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let now = Utc::now();

    for id in 1..=RACE_COUNT {
        let name = format!(
            "{} {}",
            SILKS[rng.gen_range(0..SILKS.len())],
            STAKES[rng.gen_range(0..STAKES.len())]
        );
        // Start times spread from a day ago to two days ahead, so a
        // fresh store always holds both CLOSED and OPEN races.
        let advertised_start = now + Duration::minutes(rng.gen_range(-24 * 60..=2 * 24 * 60));

        conn.execute(
            "INSERT OR IGNORE INTO races(id, meeting_id, name, number, visible, advertised_start_time) VALUES (?,?,?,?,?,?)",
            rusqlite::params![
                id,
                rng.gen_range(1..=MEETING_COUNT),
                name,
                rng.gen_range(1..=12),
                rng.gen_bool(0.5),
                advertised_start.to_rfc3339(),
            ],
        )?;
    }

    Ok(())
}
