//! Repository access to sports events.

use super::{queries, seed};
use crate::error::{Result, ServiceError};
use crate::proto::{Event, ListEventsRequestFilter};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Rows};

pub struct EventsRepo {
    conn: Mutex<Connection>,
    seeded: OnceCell<()>,
}

impl EventsRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            seeded: OnceCell::new(),
        }
    }

    /// Seeds the events table once; a failed attempt may be retried.
    pub fn init(&self) -> Result<()> {
        self.seeded
            .get_or_try_init(|| seed::seed_events(&self.conn.lock()).map_err(ServiceError::Seed))
            .map(|_| ())
    }

    /// Returns events matching `filter`, sorted by advertised start time.
    pub fn list(&self, filter: Option<&ListEventsRequestFilter>) -> Result<Vec<Event>> {
        let (query, args) = apply_filter(queries::EVENTS_LIST, filter);
        let query = format!("{query} ORDER BY advertised_start_time");

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query(params_from_iter(args.iter()))?;
        scan_events(rows)
    }
}

fn apply_filter(base: &str, filter: Option<&ListEventsRequestFilter>) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut args = Vec::new();

    if let Some(filter) = filter {
        if !filter.competition_ids.is_empty() {
            let placeholders = vec!["?"; filter.competition_ids.len()].join(",");
            clauses.push(format!("competition_id IN ({placeholders})"));
            args.extend(filter.competition_ids.iter().map(|id| Value::Integer(*id)));
        }

        if let Some(sport) = &filter.sport {
            clauses.push("sport = ?".to_string());
            args.push(Value::Text(sport.clone()));
        }
    }

    if clauses.is_empty() {
        return (base.to_string(), args);
    }

    (format!("{} WHERE {}", base, clauses.join(" AND ")), args)
}

fn scan_events(mut rows: Rows<'_>) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    while let Some(row) = rows.next()? {
        let raw_start: String = row.get(2)?;
        let advertised_start = parse_start_time(&raw_start)?;

        events.push(Event {
            id: row.get(0)?,
            name: row.get(1)?,
            advertised_start_time: Some(prost_types::Timestamp {
                seconds: advertised_start.timestamp(),
                nanos: advertised_start.timestamp_subsec_nanos() as i32,
            }),
            sport: row.get(3)?,
            home_team: row.get(4)?,
            away_team: row.get(5)?,
            competition_id: row.get(6)?,
            competition_name: row.get(7)?,
        });
    }

    Ok(events)
}

fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|start| start.with_timezone(&Utc))
        .map_err(|source| ServiceError::InvalidStartTime {
            raw: raw.to_string(),
            source,
        })
}
