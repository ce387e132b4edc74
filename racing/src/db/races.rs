//! Repository access to races.
//!
//! Every read path funnels through the same pipeline: compile the
//! filter into predicates, append the sort clause, execute, and
//! materialize rows with their derived status.

use super::gate::SeedGate;
use super::predicate::{self, Predicate, SqlParam};
use super::{queries, seed};
use crate::error::{Result, ServiceError};
use crate::proto::{ListRacesRequestFilter, Race};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params_from_iter, Connection, Rows};

/// Derived openness of a race relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceStatus {
    Open,
    Closed,
}

impl RaceStatus {
    /// A race is CLOSED once its advertised start is strictly in the
    /// past; a race starting exactly at `now` is still OPEN.
    pub fn at(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if advertised_start < now {
            RaceStatus::Closed
        } else {
            RaceStatus::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Open => "OPEN",
            RaceStatus::Closed => "CLOSED",
        }
    }
}

pub struct RacesRepo {
    conn: Mutex<Connection>,
    seed_gate: SeedGate,
}

impl RacesRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            seed_gate: SeedGate::new(),
        }
    }

    /// Seeds the races table on the first effective call; later calls
    /// are no-ops. Safe to call from any number of tasks concurrently.
    pub fn init(&self) -> Result<()> {
        if !self.seed_gate.begin() {
            return Ok(());
        }

        let outcome = seed::seed_races(&self.conn.lock()).map_err(ServiceError::Seed);
        self.seed_gate.finish(outcome.is_ok());
        outcome
    }

    /// Returns races matching `filter`, sorted by advertised start time.
    pub fn list(
        &self,
        filter: Option<&ListRacesRequestFilter>,
        order_by: Option<&str>,
    ) -> Result<Vec<Race>> {
        let (query, params) = apply_filter(queries::RACES_LIST, filter);
        let query = apply_order(&query, order_by);

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query(params_from_iter(params.iter()))?;
        scan_races(rows)
    }

    /// Returns the race with `id`, or `None` when no single row matches.
    ///
    /// Zero rows and multiple rows both yield `None`: a store that
    /// pathologically holds duplicate IDs gives no usable answer, and
    /// callers distinguish "not found" only by the empty result.
    pub fn get(&self, id: i64) -> Result<Option<Race>> {
        let predicates = [Predicate::eq("id", SqlParam::Int(id))];
        let query = predicate::render(queries::RACES_LIST, &predicates);
        let params = predicate::bind_params(&predicates);

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query(params_from_iter(params.iter()))?;
        let mut races = scan_races(rows)?;

        if races.len() == 1 {
            return Ok(races.pop());
        }
        Ok(None)
    }
}

/// Compiles `filter` into a query string and its positional parameters.
///
/// An absent filter, an empty meeting-ID set, and an unset visibility
/// flag all add nothing; the `WHERE` keyword only appears when at least
/// one predicate was built.
fn apply_filter(base: &str, filter: Option<&ListRacesRequestFilter>) -> (String, Vec<SqlParam>) {
    let mut predicates = Vec::new();

    if let Some(filter) = filter {
        if !filter.meeting_ids.is_empty() {
            predicates.push(Predicate::in_list(
                "meeting_id",
                filter.meeting_ids.iter().map(|id| SqlParam::Int(*id)).collect(),
            ));
        }

        if let Some(visible) = filter.visible {
            predicates.push(Predicate::eq("visible", SqlParam::Bool(visible)));
        }
    }

    let query = predicate::render(base, &predicates);
    let params = predicate::bind_params(&predicates);
    (query, params)
}

/// Appends the sort clause. Races always sort by advertised start time;
/// `order_by` may override the direction only. The token is upper-cased
/// and appended verbatim; callers are trusted to send ASC or DESC.
fn apply_order(query: &str, order_by: Option<&str>) -> String {
    let mut query = format!("{query} ORDER BY advertised_start_time");

    if let Some(direction) = order_by.filter(|token| !token.is_empty()) {
        query.push(' ');
        query.push_str(&direction.to_uppercase());
    }

    query
}

/// Materializes rows into races, stamping each with its derived status.
///
/// One time snapshot is taken for the whole batch so every race in a
/// response is judged against the same instant. A malformed stored
/// timestamp aborts the entire read; an exhausted row set is normal
/// termination and yields an empty collection.
fn scan_races(mut rows: Rows<'_>) -> Result<Vec<Race>> {
    let mut races = Vec::new();
    let now = Utc::now();

    while let Some(row) = rows.next()? {
        let raw_start: String = row.get(5)?;
        let advertised_start = parse_start_time(&raw_start)?;

        races.push(Race {
            id: row.get(0)?,
            meeting_id: row.get(1)?,
            name: row.get(2)?,
            number: row.get(3)?,
            visible: row.get(4)?,
            advertised_start_time: Some(to_timestamp(advertised_start)),
            status: RaceStatus::at(advertised_start, now).as_str().to_string(),
        });
    }

    Ok(races)
}

fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|start| start.with_timezone(&Utc))
        .map_err(|source| ServiceError::InvalidStartTime {
            raw: raw.to_string(),
            source,
        })
}

fn to_timestamp(start: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: start.timestamp(),
        nanos: start.timestamp_subsec_nanos() as i32,
    }
}
