//! Filter and pagination types for list queries.
//!
//! Every filter field is optional. An absent field places no constraint on
//! the result and is left out of both the SQL text and the HTTP query string,
//! so client-side omission and server-side omission mean the same thing.

use super::ids::{LeagueId, PlayerId, TeamId};
use chrono::NaiveDate;

/// Key/value pairs for an HTTP query string.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Pagination bounds applied after ordering by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip from the start of the ordered result.
    pub skip: u32,
    /// Maximum number of rows to return. Zero yields an empty result.
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 100;

    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    pub fn query_pairs(&self) -> QueryPairs {
        vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

fn push_date(pairs: &mut QueryPairs, date: Option<NaiveDate>) {
    if let Some(date) = date {
        pairs.push(("min_last_changed_date", date.format("%Y-%m-%d").to_string()));
    }
}

/// Empty strings count as not supplied
fn push_str(pairs: &mut QueryPairs, key: &'static str, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key, value.clone()));
    }
}

/// Filters for `/v0/players/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub min_last_changed_date: Option<NaiveDate>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PlayerFilter {
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_date(&mut pairs, self.min_last_changed_date);
        push_str(&mut pairs, "first_name", self.first_name.as_ref());
        push_str(&mut pairs, "last_name", self.last_name.as_ref());
        pairs
    }
}

/// Filters for `/v0/teams/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    pub min_last_changed_date: Option<NaiveDate>,
    pub team_name: Option<String>,
    pub league_id: Option<LeagueId>,
}

impl TeamFilter {
    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn league_id(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_date(&mut pairs, self.min_last_changed_date);
        push_str(&mut pairs, "team_name", self.team_name.as_ref());
        // League IDs start at 1; zero means no league filter
        if let Some(league_id) = self.league_id.filter(|id| id.as_i64() != 0) {
            pairs.push(("league_id", league_id.to_string()));
        }
        pairs
    }
}

/// Filters for `/v0/leagues/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueFilter {
    pub min_last_changed_date: Option<NaiveDate>,
    pub league_name: Option<String>,
}

impl LeagueFilter {
    pub fn league_name(mut self, league_name: impl Into<String>) -> Self {
        self.league_name = Some(league_name.into());
        self
    }

    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_date(&mut pairs, self.min_last_changed_date);
        push_str(&mut pairs, "league_name", self.league_name.as_ref());
        pairs
    }
}

/// Filters for `/v0/performances/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceFilter {
    pub min_last_changed_date: Option<NaiveDate>,
}

impl PerformanceFilter {
    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.min_last_changed_date = Some(date);
        self
    }

    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_date(&mut pairs, self.min_last_changed_date);
        pairs
    }
}

/// Filters for roster links. Only reachable through the library API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPlayerFilter {
    pub min_last_changed_date: Option<NaiveDate>,
    pub team_id: Option<TeamId>,
    pub player_id: Option<PlayerId>,
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        crate::SwcError::InvalidDate {
            value: value.to_string(),
        }
    })
}
