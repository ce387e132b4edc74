//! Typed WHERE-clause construction for the races store.
//!
//! Predicates are kept as data and rendered in two independent passes:
//! one produces the clause text, the other collects the positional
//! parameters. The two never drift apart because both walk the same
//! ordered list.

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum SqlParam {
    Int(i64),
    Bool(bool),
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Int(value) => value.to_sql(),
            SqlParam::Bool(value) => value.to_sql(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Comparison {
    Eq,
    In,
}

/// One column restriction: column, comparison, values.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Predicate {
    column: &'static str,
    comparison: Comparison,
    values: Vec<SqlParam>,
}

impl Predicate {
    pub(super) fn eq(column: &'static str, value: SqlParam) -> Self {
        Self {
            column,
            comparison: Comparison::Eq,
            values: vec![value],
        }
    }

    /// An `IN` restriction. An absent restriction is expressed by not
    /// building the predicate at all, never by an empty value list.
    pub(super) fn in_list(column: &'static str, values: Vec<SqlParam>) -> Self {
        debug_assert!(!values.is_empty());
        Self {
            column,
            comparison: Comparison::In,
            values,
        }
    }

    fn to_clause(&self) -> String {
        match self.comparison {
            Comparison::Eq => format!("{} = ?", self.column),
            Comparison::In => {
                let placeholders = vec!["?"; self.values.len()].join(",");
                format!("{} IN ({})", self.column, placeholders)
            }
        }
    }
}

/// Attaches the rendered predicates to `base` behind a single `WHERE`,
/// joined with `AND`. An empty list leaves `base` untouched.
pub(super) fn render(base: &str, predicates: &[Predicate]) -> String {
    if predicates.is_empty() {
        return base.to_string();
    }

    let clauses: Vec<String> = predicates.iter().map(Predicate::to_clause).collect();
    format!("{} WHERE {}", base, clauses.join(" AND "))
}

/// Collects the positional parameters of `predicates` in clause order.
pub(super) fn bind_params(predicates: &[Predicate]) -> Vec<SqlParam> {
    predicates
        .iter()
        .flat_map(|predicate| predicate.values.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_without_predicates_returns_base_unchanged() {
        assert_eq!(render("SELECT 1 FROM races", &[]), "SELECT 1 FROM races");
        assert!(bind_params(&[]).is_empty());
    }

    #[test]
    fn eq_predicate_renders_single_placeholder() {
        let predicates = [Predicate::eq("visible", SqlParam::Bool(true))];

        assert_eq!(
            render("SELECT * FROM races", &predicates),
            "SELECT * FROM races WHERE visible = ?"
        );
        assert_eq!(bind_params(&predicates), vec![SqlParam::Bool(true)]);
    }

    #[test]
    fn in_predicate_renders_one_placeholder_per_value() {
        let predicates = [Predicate::in_list(
            "meeting_id",
            vec![SqlParam::Int(5), SqlParam::Int(1), SqlParam::Int(9)],
        )];

        assert_eq!(
            render("SELECT * FROM races", &predicates),
            "SELECT * FROM races WHERE meeting_id IN (?,?,?)"
        );
        assert_eq!(
            bind_params(&predicates),
            vec![SqlParam::Int(5), SqlParam::Int(1), SqlParam::Int(9)]
        );
    }

    #[test]
    fn multiple_predicates_join_with_and_behind_one_where() {
        let predicates = [
            Predicate::in_list("meeting_id", vec![SqlParam::Int(1), SqlParam::Int(2)]),
            Predicate::eq("visible", SqlParam::Bool(false)),
        ];

        assert_eq!(
            render("SELECT * FROM races", &predicates),
            "SELECT * FROM races WHERE meeting_id IN (?,?) AND visible = ?"
        );
        assert_eq!(
            bind_params(&predicates),
            vec![SqlParam::Int(1), SqlParam::Int(2), SqlParam::Bool(false)]
        );
    }
}
