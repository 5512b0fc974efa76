//! Shared fixture for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use swc_ffl::{
    storage::FantasyDatabase, League, LeagueId, Performance, PerformanceId, PlayerBase, PlayerId,
    TeamBase, TeamId, TeamPlayer,
};
use tempfile::TempDir;

pub const BRYCE_YOUNG_ID: i64 = 2009;
pub const EIGHT_TEAM_LEAGUE_ID: i64 = 5002;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Leagues 5001 (4 teams), 5002 (8 teams) and 5003 (no teams), five
/// players with mixed change dates, three performances and three roster links.
pub fn seed(db: &mut FantasyDatabase) {
    for (id, name, scoring) in [
        (5001, "Pigskin Prodigal Fantasy League", "PPR"),
        (5002, "Recurring Champions League", "Half-PPR"),
        (5003, "AHAHFZZFFFL", "Standard"),
    ] {
        db.upsert_league(&League {
            league_id: LeagueId::new(id),
            league_name: name.to_string(),
            scoring_type: scoring.to_string(),
            last_changed_date: date(2024, 4, 1),
            teams: Vec::new(),
        })
        .unwrap();
    }

    let teams = (101..=104)
        .map(|id| (id, 5001))
        .chain((201..=208).map(|id| (id, 5002)));
    for (team_id, league_id) in teams {
        db.upsert_team(&TeamBase {
            league_id: LeagueId::new(league_id),
            team_id: TeamId::new(team_id),
            team_name: format!("Team {}", team_id),
            last_changed_date: date(2024, 4, 1),
        })
        .unwrap();
    }

    for (id, gsis_id, first, last, position, changed) in [
        (1001, None, "Justin", "Jefferson", "WR", date(2023, 9, 1)),
        (1002, None, "Travis", "Kelce", "TE", date(2023, 12, 31)),
        (1003, None, "Saquon", "Barkley", "RB", date(2024, 3, 10)),
        (1500, None, "Bryce", "Ford-Wheaton", "WR", date(2024, 1, 15)),
        (2009, Some("00-0039150"), "Bryce", "Young", "QB", date(2024, 4, 1)),
    ] {
        db.upsert_player(&PlayerBase {
            player_id: PlayerId::new(id),
            gsis_id: gsis_id.map(str::to_string),
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: position.to_string(),
            last_changed_date: changed,
        })
        .unwrap();
    }

    for (id, player_id, week, points, changed) in [
        (17001, 2009, "202401", 12, date(2024, 3, 1)),
        (17002, 2009, "202402", 8, date(2024, 4, 1)),
        (17003, 1001, "202401", 21, date(2023, 9, 8)),
    ] {
        db.upsert_performance(&Performance {
            performance_id: PerformanceId::new(id),
            player_id: PlayerId::new(player_id),
            week_number: week.to_string(),
            fantasy_points: points,
            last_changed_date: changed,
        })
        .unwrap();
    }

    for (team_id, player_id) in [(201, 1001), (201, 2009), (101, 1002)] {
        db.upsert_team_player(&TeamPlayer {
            team_id: TeamId::new(team_id),
            player_id: PlayerId::new(player_id),
            last_changed_date: date(2024, 4, 1),
        })
        .unwrap();
    }
}

pub fn seed_file(path: &Path) {
    let mut db = FantasyDatabase::open(path).unwrap();
    seed(&mut db);
}

/// Seeded database file in a temp dir; keep the `TempDir` alive while in use
pub fn seeded_database() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fantasy_football.db");
    seed_file(&path);
    (dir, path)
}
