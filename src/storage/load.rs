//! Write primitives for the bulk-load process that seeds the record store.
//!
//! Nothing on the HTTP surface calls these; they exist for loaders and test
//! fixtures. Each call replaces any existing row with the same key.

use super::schema::FantasyDatabase;
use crate::types::{League, Performance, PlayerBase, TeamBase, TeamPlayer};
use anyhow::Result;
use rusqlite::params;

impl FantasyDatabase {
    /// Insert or replace a league row. Nested `teams` are not written.
    pub fn upsert_league(&mut self, league: &League) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO league (league_id, league_name, scoring_type, last_changed_date)
             VALUES (?, ?, ?, ?)",
            params![
                league.league_id.as_i64(),
                league.league_name,
                league.scoring_type,
                league.last_changed_date
            ],
        )?;
        Ok(())
    }

    pub fn upsert_team(&mut self, team: &TeamBase) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO team (team_id, team_name, league_id, last_changed_date)
             VALUES (?, ?, ?, ?)",
            params![
                team.team_id.as_i64(),
                team.team_name,
                team.league_id.as_i64(),
                team.last_changed_date
            ],
        )?;
        Ok(())
    }

    pub fn upsert_player(&mut self, player: &PlayerBase) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO player
             (player_id, gsis_id, first_name, last_name, position, last_changed_date)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_i64(),
                player.gsis_id,
                player.first_name,
                player.last_name,
                player.position,
                player.last_changed_date
            ],
        )?;
        Ok(())
    }

    pub fn upsert_performance(&mut self, performance: &Performance) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO performance
             (performance_id, week_number, fantasy_points, player_id, last_changed_date)
             VALUES (?, ?, ?, ?, ?)",
            params![
                performance.performance_id.as_i64(),
                performance.week_number,
                performance.fantasy_points,
                performance.player_id.as_i64(),
                performance.last_changed_date
            ],
        )?;
        Ok(())
    }

    pub fn upsert_team_player(&mut self, link: &TeamPlayer) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO team_player (team_id, player_id, last_changed_date)
             VALUES (?, ?, ?)",
            params![
                link.team_id.as_i64(),
                link.player_id.as_i64(),
                link.last_changed_date
            ],
        )?;
        Ok(())
    }
}
