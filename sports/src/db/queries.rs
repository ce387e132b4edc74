//! Base SQL statements for the events store.

pub(super) const EVENTS_LIST: &str =
    "SELECT id, name, advertised_start_time, sport, home_team, away_team, competition_id, competition_name FROM sports";
