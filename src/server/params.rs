//! Query-string shapes accepted by the list endpoints

use crate::types::{
    LeagueFilter, LeagueId, Page, PerformanceFilter, PlayerFilter, TeamFilter,
};
use chrono::NaiveDate;
use serde::Deserialize;

fn default_limit() -> u32 {
    Page::DEFAULT_LIMIT
}

/// `?first_name=` filters nothing, same as leaving the key out
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct PlayersQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub min_last_changed_date: Option<NaiveDate>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PlayersQuery {
    pub fn into_parts(self) -> (PlayerFilter, Page) {
        let filter = PlayerFilter {
            min_last_changed_date: self.min_last_changed_date,
            first_name: supplied(self.first_name),
            last_name: supplied(self.last_name),
        };
        (filter, Page::new(self.skip, self.limit))
    }
}

#[derive(Debug, Deserialize)]
pub struct TeamsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub min_last_changed_date: Option<NaiveDate>,
    pub team_name: Option<String>,
    pub league_id: Option<LeagueId>,
}

impl TeamsQuery {
    pub fn into_parts(self) -> (TeamFilter, Page) {
        let filter = TeamFilter {
            min_last_changed_date: self.min_last_changed_date,
            team_name: supplied(self.team_name),
            league_id: self.league_id,
        };
        (filter, Page::new(self.skip, self.limit))
    }
}

#[derive(Debug, Deserialize)]
pub struct LeaguesQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub min_last_changed_date: Option<NaiveDate>,
    pub league_name: Option<String>,
}

impl LeaguesQuery {
    pub fn into_parts(self) -> (LeagueFilter, Page) {
        let filter = LeagueFilter {
            min_last_changed_date: self.min_last_changed_date,
            league_name: supplied(self.league_name),
        };
        (filter, Page::new(self.skip, self.limit))
    }
}

#[derive(Debug, Deserialize)]
pub struct PerformancesQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    pub min_last_changed_date: Option<NaiveDate>,
}

impl PerformancesQuery {
    pub fn into_parts(self) -> (PerformanceFilter, Page) {
        let filter = PerformanceFilter {
            min_last_changed_date: self.min_last_changed_date,
        };
        (filter, Page::new(self.skip, self.limit))
    }
}
