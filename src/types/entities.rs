//! Entity shapes exchanged over the wire and read from the record store.
//!
//! Field names are the snake_case wire names. Nested collections
//! (`performances`, `players`, `teams`) default to empty when a payload
//! omits them.

use super::ids::{LeagueId, PerformanceId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body returned by the root endpoint.
pub const HEALTH_CHECK_MESSAGE: &str = "API health check successful";

/// A single week's fantasy scoring for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: PerformanceId,
    pub player_id: PlayerId,
    /// Week label as published by the data source, e.g. `"202401"`.
    pub week_number: String,
    pub fantasy_points: i64,
    pub last_changed_date: NaiveDate,
}

/// Player attributes without any nested relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBase {
    pub player_id: PlayerId,
    /// NFL GSIS identifier, unique when present.
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

/// Player with their weekly performances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Player {
    pub fn from_base(base: PlayerBase, performances: Vec<Performance>) -> Self {
        Self {
            player_id: base.player_id,
            gsis_id: base.gsis_id,
            first_name: base.first_name,
            last_name: base.last_name,
            position: base.position,
            last_changed_date: base.last_changed_date,
            performances,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<Player> for PlayerBase {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.player_id,
            gsis_id: player.gsis_id,
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            last_changed_date: player.last_changed_date,
        }
    }
}

/// Team attributes without the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBase {
    pub league_id: LeagueId,
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
}

/// Fantasy team with its rostered players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub league_id: LeagueId,
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub players: Vec<PlayerBase>,
}

impl Team {
    pub fn from_base(base: TeamBase, players: Vec<PlayerBase>) -> Self {
        Self {
            league_id: base.league_id,
            team_id: base.team_id,
            team_name: base.team_name,
            last_changed_date: base.last_changed_date,
            players,
        }
    }
}

impl From<Team> for TeamBase {
    fn from(team: Team) -> Self {
        Self {
            league_id: team.league_id,
            team_id: team.team_id,
            team_name: team.team_name,
            last_changed_date: team.last_changed_date,
        }
    }
}

/// League with its member teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    /// Scoring system tag, e.g. `"PPR"` or `"Half-PPR"`.
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub teams: Vec<TeamBase>,
}

/// Roster link between a team and a player.
///
/// The link carries its own `last_changed_date` so roster moves can be
/// tracked independently of the team and player rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub team_id: TeamId,
    pub player_id: PlayerId,
    pub last_changed_date: NaiveDate,
}

/// Aggregate row counts reported by `/v0/counts/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Counts {
    pub league_count: u64,
    pub team_count: u64,
    pub player_count: u64,
}

/// The entity kinds held by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Team,
    League,
    Performance,
    TeamPlayer,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Player,
        EntityKind::Team,
        EntityKind::League,
        EntityKind::Performance,
        EntityKind::TeamPlayer,
    ];

    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Team => "team",
            EntityKind::League => "league",
            EntityKind::Performance => "performance",
            EntityKind::TeamPlayer => "team_player",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Player => "Player",
            EntityKind::Team => "Team",
            EntityKind::League => "League",
            EntityKind::Performance => "Performance",
            EntityKind::TeamPlayer => "Team player",
        };
        write!(f, "{}", s)
    }
}
