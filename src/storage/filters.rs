//! Translation of list filters into SQL predicates
//!
//! Only supplied filters contribute a clause. A filter set with nothing
//! supplied renders no `WHERE` at all rather than an always-true predicate.

use crate::types::{LeagueFilter, PerformanceFilter, PlayerFilter, TeamFilter, TeamPlayerFilter};
use chrono::NaiveDate;
use rusqlite::ToSql;

/// Conjunction of predicates with their bound parameters
#[derive(Default)]
pub struct WhereClause {
    clauses: Vec<&'static str>,
    params: Vec<Box<dyn ToSql>>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `clause` (containing a single `?`) bound to `value` when present
    pub fn push_opt<T: ToSql + 'static>(&mut self, clause: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.clauses.push(clause);
            self.params.push(Box::new(value));
        }
    }

    /// Render as ` WHERE a AND b`, or an empty string when nothing was supplied
    pub fn to_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> impl Iterator<Item = &dyn ToSql> {
        self.params.iter().map(|p| p.as_ref())
    }
}

/// Filters that can be rendered as a [`WhereClause`]
pub trait SqlFilter {
    fn where_clause(&self) -> WhereClause;
}

fn changed_since(clause: &mut WhereClause, date: Option<NaiveDate>) {
    clause.push_opt("last_changed_date >= ?", date);
}

impl SqlFilter for PlayerFilter {
    fn where_clause(&self) -> WhereClause {
        let mut clause = WhereClause::new();
        changed_since(&mut clause, self.min_last_changed_date);
        clause.push_opt("first_name = ?", self.first_name.clone());
        clause.push_opt("last_name = ?", self.last_name.clone());
        clause
    }
}

impl SqlFilter for TeamFilter {
    fn where_clause(&self) -> WhereClause {
        let mut clause = WhereClause::new();
        changed_since(&mut clause, self.min_last_changed_date);
        clause.push_opt("team_name = ?", self.team_name.clone());
        clause.push_opt("league_id = ?", self.league_id.map(|id| id.as_i64()));
        clause
    }
}

impl SqlFilter for LeagueFilter {
    fn where_clause(&self) -> WhereClause {
        let mut clause = WhereClause::new();
        changed_since(&mut clause, self.min_last_changed_date);
        clause.push_opt("league_name = ?", self.league_name.clone());
        clause
    }
}

impl SqlFilter for PerformanceFilter {
    fn where_clause(&self) -> WhereClause {
        let mut clause = WhereClause::new();
        changed_since(&mut clause, self.min_last_changed_date);
        clause
    }
}

impl SqlFilter for TeamPlayerFilter {
    fn where_clause(&self) -> WhereClause {
        let mut clause = WhereClause::new();
        changed_since(&mut clause, self.min_last_changed_date);
        clause.push_opt("team_id = ?", self.team_id.map(|id| id.as_i64()));
        clause.push_opt("player_id = ?", self.player_id.map(|id| id.as_i64()));
        clause
    }
}
