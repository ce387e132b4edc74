//! Base SQL statements for the races store.
//!
//! Statements hold no dynamic content; predicates and ordering are
//! attached by the repository at call time.

/// Columns are scanned positionally by the row materializer.
pub(super) const RACES_LIST: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";
