mod gate;
mod predicate;
mod queries;
mod races;
mod seed;

pub use races::{RaceStatus, RacesRepo};

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Opens the races database, creating the file if it does not exist.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}
