//! Read queries for the record store
//!
//! Every list query orders by primary key before applying `LIMIT`/`OFFSET`,
//! so pagination is stable across calls.

use super::{
    filters::{SqlFilter, WhereClause},
    schema::FantasyDatabase,
};
use crate::types::{
    Counts, EntityKind, League, LeagueFilter, LeagueId, Page, Performance, PerformanceFilter,
    PerformanceId, Player, PlayerBase, PlayerFilter, PlayerId, Team, TeamBase, TeamFilter, TeamId,
    TeamPlayer, TeamPlayerFilter,
};
use anyhow::Result;
use rusqlite::{params, Row, ToSql};

const PLAYER_SELECT: &str = "SELECT player_id, gsis_id, first_name, last_name, position, \
                             last_changed_date FROM player";
const TEAM_SELECT: &str = "SELECT league_id, team_id, team_name, last_changed_date FROM team";
const LEAGUE_SELECT: &str =
    "SELECT league_id, league_name, scoring_type, last_changed_date FROM league";
const PERFORMANCE_SELECT: &str = "SELECT performance_id, player_id, week_number, fantasy_points, \
                                  last_changed_date FROM performance";
const TEAM_PLAYER_SELECT: &str = "SELECT team_id, player_id, last_changed_date FROM team_player";

impl FantasyDatabase {
    /// List players matching `filter`, each with their performances
    pub fn list_players(&self, filter: &PlayerFilter, page: Page) -> Result<Vec<Player>> {
        let bases = self.select_page(
            PLAYER_SELECT,
            "player_id",
            &filter.where_clause(),
            page,
            row_to_player_base,
        )?;
        bases
            .into_iter()
            .map(|base| {
                let performances = self.performances_for_player(base.player_id)?;
                Ok(Player::from_base(base, performances))
            })
            .collect()
    }

    /// Get a single player by ID, or `None` if no such player exists
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let sql = format!("{PLAYER_SELECT} WHERE player_id = ?");
        let result = self
            .conn
            .query_row(&sql, params![player_id.as_i64()], row_to_player_base);

        let base = match result {
            Ok(base) => base,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let performances = self.performances_for_player(base.player_id)?;
        Ok(Some(Player::from_base(base, performances)))
    }

    /// List teams matching `filter`, each with its rostered players
    pub fn list_teams(&self, filter: &TeamFilter, page: Page) -> Result<Vec<Team>> {
        let bases = self.select_page(
            TEAM_SELECT,
            "team_id",
            &filter.where_clause(),
            page,
            row_to_team_base,
        )?;
        bases
            .into_iter()
            .map(|base| {
                let players = self.players_for_team(base.team_id)?;
                Ok(Team::from_base(base, players))
            })
            .collect()
    }

    /// Get a single team by ID
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let sql = format!("{TEAM_SELECT} WHERE team_id = ?");
        let result = self
            .conn
            .query_row(&sql, params![team_id.as_i64()], row_to_team_base);

        let base = match result {
            Ok(base) => base,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let players = self.players_for_team(base.team_id)?;
        Ok(Some(Team::from_base(base, players)))
    }

    /// List leagues matching `filter`, each with its member teams
    pub fn list_leagues(&self, filter: &LeagueFilter, page: Page) -> Result<Vec<League>> {
        let leagues = self.select_page(
            LEAGUE_SELECT,
            "league_id",
            &filter.where_clause(),
            page,
            row_to_league,
        )?;
        leagues
            .into_iter()
            .map(|mut league| {
                league.teams = self.teams_for_league(league.league_id)?;
                Ok(league)
            })
            .collect()
    }

    /// Get a single league by ID
    pub fn get_league(&self, league_id: LeagueId) -> Result<Option<League>> {
        let sql = format!("{LEAGUE_SELECT} WHERE league_id = ?");
        let result = self
            .conn
            .query_row(&sql, params![league_id.as_i64()], row_to_league);

        let mut league = match result {
            Ok(league) => league,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        league.teams = self.teams_for_league(league.league_id)?;
        Ok(Some(league))
    }

    pub fn list_performances(
        &self,
        filter: &PerformanceFilter,
        page: Page,
    ) -> Result<Vec<Performance>> {
        self.select_page(
            PERFORMANCE_SELECT,
            "performance_id",
            &filter.where_clause(),
            page,
            row_to_performance,
        )
    }

    pub fn get_performance(&self, performance_id: PerformanceId) -> Result<Option<Performance>> {
        let sql = format!("{PERFORMANCE_SELECT} WHERE performance_id = ?");
        match self.conn.query_row(
            &sql,
            params![performance_id.as_i64()],
            row_to_performance,
        ) {
            Ok(performance) => Ok(Some(performance)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List roster links, ordered by (team_id, player_id)
    pub fn list_team_players(
        &self,
        filter: &TeamPlayerFilter,
        page: Page,
    ) -> Result<Vec<TeamPlayer>> {
        self.select_page(
            TEAM_PLAYER_SELECT,
            "team_id, player_id",
            &filter.where_clause(),
            page,
            |row| {
                Ok(TeamPlayer {
                    team_id: TeamId::new(row.get(0)?),
                    player_id: PlayerId::new(row.get(1)?),
                    last_changed_date: row.get(2)?,
                })
            },
        )
    }

    /// Unfiltered row count for one entity kind
    pub fn count(&self, kind: EntityKind) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// League, team and player totals
    pub fn counts(&self) -> Result<Counts> {
        Ok(Counts {
            league_count: self.count(EntityKind::League)?,
            team_count: self.count(EntityKind::Team)?,
            player_count: self.count(EntityKind::Player)?,
        })
    }

    /// Run `base_sql` with the filter predicates, primary-key ordering and page bounds
    fn select_page<T, F>(
        &self,
        base_sql: &str,
        order_by: &str,
        filter: &WhereClause,
        page: Page,
        map_row: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let sql = format!(
            "{}{} ORDER BY {} LIMIT ? OFFSET ?",
            base_sql,
            filter.to_sql(),
            order_by
        );
        let limit = i64::from(page.limit);
        let offset = i64::from(page.skip);

        let mut params: Vec<&dyn ToSql> = filter.params().collect();
        params.push(&limit);
        params.push(&offset);

        tracing::debug!(sql = %sql, skip = page.skip, limit = page.limit, "running list query");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(&params[..], map_row)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn performances_for_player(&self, player_id: PlayerId) -> Result<Vec<Performance>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT performance_id, player_id, week_number, fantasy_points, last_changed_date
             FROM performance
             WHERE player_id = ?
             ORDER BY performance_id",
        )?;
        let rows = stmt.query_map(params![player_id.as_i64()], row_to_performance)?;

        let mut performances = Vec::new();
        for row in rows {
            performances.push(row?);
        }
        Ok(performances)
    }

    fn players_for_team(&self, team_id: TeamId) -> Result<Vec<PlayerBase>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT p.player_id, p.gsis_id, p.first_name, p.last_name, p.position,
                    p.last_changed_date
             FROM player p
             JOIN team_player tp ON tp.player_id = p.player_id
             WHERE tp.team_id = ?
             ORDER BY p.player_id",
        )?;
        let rows = stmt.query_map(params![team_id.as_i64()], row_to_player_base)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    fn teams_for_league(&self, league_id: LeagueId) -> Result<Vec<TeamBase>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT league_id, team_id, team_name, last_changed_date
             FROM team
             WHERE league_id = ?
             ORDER BY team_id",
        )?;
        let rows = stmt.query_map(params![league_id.as_i64()], row_to_team_base)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }
}

fn row_to_player_base(row: &Row<'_>) -> rusqlite::Result<PlayerBase> {
    Ok(PlayerBase {
        player_id: PlayerId::new(row.get(0)?),
        gsis_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        position: row.get(4)?,
        last_changed_date: row.get(5)?,
    })
}

fn row_to_team_base(row: &Row<'_>) -> rusqlite::Result<TeamBase> {
    Ok(TeamBase {
        league_id: LeagueId::new(row.get(0)?),
        team_id: TeamId::new(row.get(1)?),
        team_name: row.get(2)?,
        last_changed_date: row.get(3)?,
    })
}

fn row_to_league(row: &Row<'_>) -> rusqlite::Result<League> {
    Ok(League {
        league_id: LeagueId::new(row.get(0)?),
        league_name: row.get(1)?,
        scoring_type: row.get(2)?,
        last_changed_date: row.get(3)?,
        teams: Vec::new(),
    })
}

fn row_to_performance(row: &Row<'_>) -> rusqlite::Result<Performance> {
    Ok(Performance {
        performance_id: PerformanceId::new(row.get(0)?),
        player_id: PlayerId::new(row.get(1)?),
        week_number: row.get(2)?,
        fantasy_points: row.get(3)?,
        last_changed_date: row.get(4)?,
    })
}
