//! Unit tests for storage functionality

use super::*;
use crate::types::{
    EntityKind, League, LeagueFilter, LeagueId, Page, Performance, PerformanceFilter,
    PerformanceId, PlayerBase, PlayerFilter, PlayerId, TeamBase, TeamFilter, TeamId, TeamPlayer,
    TeamPlayerFilter,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn player(id: i64, first: &str, last: &str, position: &str, changed: NaiveDate) -> PlayerBase {
    PlayerBase {
        player_id: PlayerId::new(id),
        gsis_id: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: position.to_string(),
        last_changed_date: changed,
    }
}

/// Two leagues, three teams, five players (inserted out of key order)
fn create_test_db() -> FantasyDatabase {
    let mut db = FantasyDatabase::new_in_memory().unwrap();

    for (id, name, scoring) in [
        (5002, "Recurring Champions League", "Half-PPR"),
        (5001, "Pigskin Prodigal Fantasy League", "PPR"),
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

    for (team_id, league_id, name) in [
        (103, 5002, "Swamp Foxes"),
        (101, 5001, "Bears of Balch"),
        (102, 5002, "Hawks"),
    ] {
        db.upsert_team(&TeamBase {
            league_id: LeagueId::new(league_id),
            team_id: TeamId::new(team_id),
            team_name: name.to_string(),
            last_changed_date: date(2024, 4, 1),
        })
        .unwrap();
    }

    let players = [
        player(2009, "Bryce", "Young", "QB", date(2024, 4, 1)),
        player(1001, "Justin", "Jefferson", "WR", date(2023, 9, 1)),
        player(1500, "Bryce", "Ford-Wheaton", "WR", date(2024, 1, 15)),
        player(1003, "Saquon", "Barkley", "RB", date(2024, 3, 10)),
        player(1002, "Travis", "Kelce", "TE", date(2023, 12, 31)),
    ];
    for p in &players {
        db.upsert_player(p).unwrap();
    }

    for (id, player_id, week, points, changed) in [
        (17002, 2009, "202402", 8, date(2024, 4, 1)),
        (17001, 2009, "202401", 12, date(2024, 3, 1)),
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

    for (team_id, player_id, changed) in [
        (101, 1001, date(2023, 9, 1)),
        (101, 2009, date(2024, 4, 1)),
        (102, 1002, date(2024, 1, 1)),
    ] {
        db.upsert_team_player(&TeamPlayer {
            team_id: TeamId::new(team_id),
            player_id: PlayerId::new(player_id),
            last_changed_date: changed,
        })
        .unwrap();
    }

    db
}

fn player_ids(db: &FantasyDatabase, filter: &PlayerFilter, page: Page) -> Vec<i64> {
    db.list_players(filter, page)
        .unwrap()
        .iter()
        .map(|p| p.player_id.as_i64())
        .collect()
}

#[test]
fn test_database_creation() {
    let db = FantasyDatabase::new_in_memory().unwrap();
    let counts = db.counts().unwrap();
    assert_eq!(counts.league_count, 0);
    assert_eq!(counts.team_count, 0);
    assert_eq!(counts.player_count, 0);
}

#[test]
fn test_list_players_ordered_by_primary_key() {
    let db = create_test_db();
    assert_eq!(
        player_ids(&db, &PlayerFilter::default(), Page::default()),
        vec![1001, 1002, 1003, 1500, 2009]
    );
}

#[test]
fn test_pagination_slices_ordered_result() {
    let db = create_test_db();
    let all = player_ids(&db, &PlayerFilter::default(), Page::default());

    assert_eq!(player_ids(&db, &PlayerFilter::default(), Page::new(1, 2)), all[1..3]);
    assert_eq!(player_ids(&db, &PlayerFilter::default(), Page::new(3, 100)), all[3..]);
}

#[test]
fn test_zero_limit_is_empty() {
    let db = create_test_db();
    assert!(player_ids(&db, &PlayerFilter::default(), Page::new(0, 0)).is_empty());
}

#[test]
fn test_skip_past_end_is_empty() {
    let db = create_test_db();
    assert!(player_ids(&db, &PlayerFilter::default(), Page::new(50, 10)).is_empty());
}

#[test]
fn test_exact_name_filters() {
    let db = create_test_db();

    let bryces = PlayerFilter::default().first_name("Bryce");
    assert_eq!(player_ids(&db, &bryces, Page::default()), vec![1500, 2009]);

    let bryce_young = PlayerFilter::default().first_name("Bryce").last_name("Young");
    assert_eq!(player_ids(&db, &bryce_young, Page::default()), vec![2009]);

    // Exact match only, no prefix or case folding
    let partial = PlayerFilter::default().first_name("Bry");
    assert!(player_ids(&db, &partial, Page::default()).is_empty());
    let lower = PlayerFilter::default().first_name("bryce");
    assert!(player_ids(&db, &lower, Page::default()).is_empty());
}

#[test]
fn test_min_last_changed_date_is_inclusive() {
    let db = create_test_db();
    let filter = PlayerFilter::default().changed_since(date(2024, 1, 15));
    assert_eq!(player_ids(&db, &filter, Page::default()), vec![1003, 1500, 2009]);
}

#[test]
fn test_filters_combine_with_and() {
    let db = create_test_db();
    let filter = PlayerFilter::default()
        .first_name("Bryce")
        .changed_since(date(2024, 2, 1));
    assert_eq!(player_ids(&db, &filter, Page::default()), vec![2009]);
}

#[test]
fn test_players_include_performances() {
    let db = create_test_db();
    let player = db.get_player(PlayerId::new(2009)).unwrap().unwrap();

    let ids: Vec<i64> = player
        .performances
        .iter()
        .map(|p| p.performance_id.as_i64())
        .collect();
    assert_eq!(ids, vec![17001, 17002]);
    assert!(db.get_player(PlayerId::new(1002)).unwrap().unwrap().performances.is_empty());
}

#[test]
fn test_get_missing_returns_none() {
    let db = create_test_db();
    assert!(db.get_player(PlayerId::new(9999)).unwrap().is_none());
    assert!(db.get_team(TeamId::new(9999)).unwrap().is_none());
    assert!(db.get_league(LeagueId::new(9999)).unwrap().is_none());
    assert!(db.get_performance(PerformanceId::new(9999)).unwrap().is_none());
}

#[test]
fn test_get_league_nests_teams() {
    let db = create_test_db();
    let league = db.get_league(LeagueId::new(5002)).unwrap().unwrap();

    assert_eq!(league.scoring_type, "Half-PPR");
    let team_ids: Vec<i64> = league.teams.iter().map(|t| t.team_id.as_i64()).collect();
    assert_eq!(team_ids, vec![102, 103]);
}

#[test]
fn test_get_team_nests_roster() {
    let db = create_test_db();
    let team = db.get_team(TeamId::new(101)).unwrap().unwrap();

    assert_eq!(team.team_name, "Bears of Balch");
    let roster: Vec<i64> = team.players.iter().map(|p| p.player_id.as_i64()).collect();
    assert_eq!(roster, vec![1001, 2009]);
    assert!(db.get_team(TeamId::new(103)).unwrap().unwrap().players.is_empty());
}

#[test]
fn test_list_teams_by_league() {
    let db = create_test_db();
    let teams = db
        .list_teams(&TeamFilter::default().league_id(LeagueId::new(5002)), Page::default())
        .unwrap();
    let ids: Vec<i64> = teams.iter().map(|t| t.team_id.as_i64()).collect();
    assert_eq!(ids, vec![102, 103]);

    let named = db
        .list_teams(&TeamFilter::default().team_name("Hawks"), Page::default())
        .unwrap();
    assert_eq!(named.len(), 1);
    assert_eq!(named[0].team_id, TeamId::new(102));
}

#[test]
fn test_list_leagues_by_name() {
    let db = create_test_db();
    let leagues = db
        .list_leagues(
            &LeagueFilter::default().league_name("Recurring Champions League"),
            Page::default(),
        )
        .unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].league_id, LeagueId::new(5002));
    assert_eq!(leagues[0].teams.len(), 2);
}

#[test]
fn test_list_performances_date_filter() {
    let db = create_test_db();
    let performances = db
        .list_performances(
            &PerformanceFilter::default().changed_since(date(2024, 1, 1)),
            Page::default(),
        )
        .unwrap();
    let ids: Vec<i64> = performances
        .iter()
        .map(|p| p.performance_id.as_i64())
        .collect();
    assert_eq!(ids, vec![17001, 17002]);
}

#[test]
fn test_list_team_players_filters() {
    let db = create_test_db();

    let all = db
        .list_team_players(&TeamPlayerFilter::default(), Page::default())
        .unwrap();
    let keys: Vec<(i64, i64)> = all
        .iter()
        .map(|tp| (tp.team_id.as_i64(), tp.player_id.as_i64()))
        .collect();
    assert_eq!(keys, vec![(101, 1001), (101, 2009), (102, 1002)]);

    let filter = TeamPlayerFilter {
        team_id: Some(TeamId::new(101)),
        min_last_changed_date: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    let recent = db.list_team_players(&filter, Page::default()).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].player_id, PlayerId::new(2009));
}

#[test]
fn test_counts_match_unfiltered_lists() {
    let db = create_test_db();
    let counts = db.counts().unwrap();

    let everything = Page::new(0, u32::MAX);
    let leagues = db.list_leagues(&LeagueFilter::default(), everything).unwrap();
    let teams = db.list_teams(&TeamFilter::default(), everything).unwrap();
    let players = db.list_players(&PlayerFilter::default(), everything).unwrap();
    assert_eq!(counts.league_count, leagues.len() as u64);
    assert_eq!(counts.team_count, teams.len() as u64);
    assert_eq!(counts.player_count, players.len() as u64);
    assert_eq!(db.count(EntityKind::Performance).unwrap(), 3);
    assert_eq!(db.count(EntityKind::TeamPlayer).unwrap(), 3);
}

#[test]
fn test_where_clause_sql() {
    assert_eq!(PlayerFilter::default().where_clause().to_sql(), "");

    let clause = PlayerFilter::default()
        .first_name("Bryce")
        .changed_since(date(2024, 1, 1))
        .where_clause();
    assert_eq!(clause.params().count(), 2);
    assert!(clause.to_sql().starts_with(" WHERE "));
    assert!(clause.to_sql().contains(" AND "));
}

#[test]
fn test_open_file_then_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("swc.db");

    {
        let mut db = FantasyDatabase::open(&path).unwrap();
        db.upsert_player(&player(1001, "Justin", "Jefferson", "WR", date(2023, 9, 1)))
            .unwrap();
    }

    let mut reader = FantasyDatabase::open_read_only(&path).unwrap();
    assert_eq!(reader.count(EntityKind::Player).unwrap(), 1);
    // Writes through a read-only connection are refused
    assert!(reader
        .upsert_player(&player(1002, "Travis", "Kelce", "TE", date(2023, 12, 31)))
        .is_err());
}
