//! Route handlers for the `/v0` API

use super::{
    error::ApiError,
    params::{LeaguesQuery, PerformancesQuery, PlayersQuery, TeamsQuery},
    AppState,
};
use crate::types::{
    Counts, EntityKind, League, LeagueId, Performance, PerformanceId, Player, PlayerId, Team,
    TeamId, HEALTH_CHECK_MESSAGE,
};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": HEALTH_CHECK_MESSAGE }))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}

pub async fn list_players(
    State(state): State<AppState>,
    query: Result<Query<PlayersQuery>, QueryRejection>,
) -> ApiResult<Vec<Player>> {
    let Query(query) = query?;
    let (filter, page) = query.into_parts();
    let players = state
        .read(move |db| db.list_players(&filter, page))
        .await?;
    Ok(Json(players))
}

pub async fn get_player(
    State(state): State<AppState>,
    player_id: Result<Path<PlayerId>, PathRejection>,
) -> ApiResult<Player> {
    let Path(player_id) = player_id?;
    state
        .read(move |db| db.get_player(player_id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Player))
}

pub async fn list_performances(
    State(state): State<AppState>,
    query: Result<Query<PerformancesQuery>, QueryRejection>,
) -> ApiResult<Vec<Performance>> {
    let Query(query) = query?;
    let (filter, page) = query.into_parts();
    let performances = state
        .read(move |db| db.list_performances(&filter, page))
        .await?;
    Ok(Json(performances))
}

pub async fn get_performance(
    State(state): State<AppState>,
    performance_id: Result<Path<PerformanceId>, PathRejection>,
) -> ApiResult<Performance> {
    let Path(performance_id) = performance_id?;
    state
        .read(move |db| db.get_performance(performance_id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Performance))
}

pub async fn list_leagues(
    State(state): State<AppState>,
    query: Result<Query<LeaguesQuery>, QueryRejection>,
) -> ApiResult<Vec<League>> {
    let Query(query) = query?;
    let (filter, page) = query.into_parts();
    let leagues = state
        .read(move |db| db.list_leagues(&filter, page))
        .await?;
    Ok(Json(leagues))
}

pub async fn get_league(
    State(state): State<AppState>,
    league_id: Result<Path<LeagueId>, PathRejection>,
) -> ApiResult<League> {
    let Path(league_id) = league_id?;
    state
        .read(move |db| db.get_league(league_id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::League))
}

pub async fn list_teams(
    State(state): State<AppState>,
    query: Result<Query<TeamsQuery>, QueryRejection>,
) -> ApiResult<Vec<Team>> {
    let Query(query) = query?;
    let (filter, page) = query.into_parts();
    let teams = state.read(move |db| db.list_teams(&filter, page)).await?;
    Ok(Json(teams))
}

pub async fn get_team(
    State(state): State<AppState>,
    team_id: Result<Path<TeamId>, PathRejection>,
) -> ApiResult<Team> {
    let Path(team_id) = team_id?;
    state
        .read(move |db| db.get_team(team_id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(EntityKind::Team))
}

pub async fn counts(State(state): State<AppState>) -> ApiResult<Counts> {
    let counts = state.read(|db| db.counts()).await?;
    Ok(Json(counts))
}
