//! HTTP boundary for the query layer
//!
//! Exposes the read-only `/v0` API over axum. Each request opens its own
//! read-only connection on a blocking thread, runs one query and closes it;
//! there is no shared mutable state between requests.

pub mod error;
pub mod handlers;
pub mod params;


use crate::{storage::FantasyDatabase, Result};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use error::ApiError;
use std::{
    future::Future,
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};
use tokio::net::TcpListener;

/// Settings for [`serve`]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: SocketAddr,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// `127.0.0.1:8000`
    pub fn default_address() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 8000))
    }
}

/// Shared handler state: where the record store lives
#[derive(Debug, Clone)]
pub struct AppState {
    db_path: Arc<PathBuf>,
}

impl AppState {
    /// Ensure the database file and schema exist, then serve reads from it
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        FantasyDatabase::open(&db_path)?;
        Ok(Self {
            db_path: Arc::new(db_path),
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Run `query` against a fresh read-only connection on the blocking pool
    pub async fn read<T, F>(&self, query: F) -> std::result::Result<T, ApiError>
    where
        F: FnOnce(&FantasyDatabase) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        let result = tokio::task::spawn_blocking(move || {
            let db = FantasyDatabase::open_read_only(path.as_path())?;
            query(&db)
        })
        .await?;
        Ok(result?)
    }
}

/// Build the API router.
///
/// List routes answer with and without the trailing slash; item routes accept
/// an optional trailing slash.
pub fn router(state: AppState) -> Router {
    let players = get(handlers::list_players);
    let player = get(handlers::get_player);
    let performances = get(handlers::list_performances);
    let performance = get(handlers::get_performance);
    let leagues = get(handlers::list_leagues);
    let league = get(handlers::get_league);
    let teams = get(handlers::list_teams);
    let team = get(handlers::get_team);
    let counts = get(handlers::counts);

    Router::new()
        .route("/", get(handlers::health_check))
        .route("/v0/players/", players.clone())
        .route("/v0/players", players)
        .route("/v0/players/{player_id}", player.clone())
        .route("/v0/players/{player_id}/", player)
        .route("/v0/performances/", performances.clone())
        .route("/v0/performances", performances)
        .route("/v0/performances/{performance_id}", performance.clone())
        .route("/v0/performances/{performance_id}/", performance)
        .route("/v0/leagues/", leagues.clone())
        .route("/v0/leagues", leagues)
        .route("/v0/leagues/{league_id}", league.clone())
        .route("/v0/leagues/{league_id}/", league)
        .route("/v0/teams/", teams.clone())
        .route("/v0/teams", teams)
        .route("/v0/teams/{team_id}", team.clone())
        .route("/v0/teams/{team_id}/", team)
        .route("/v0/counts/", counts.clone())
        .route("/v0/counts", counts)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "handled request"
    );
    response
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_with_listener<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(
        address = %listener.local_addr()?,
        database = %state.database_path().display(),
        "serving fantasy football API"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

/// Bind `config.address` and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::open(&config.database_path)?;
    let listener = TcpListener::bind(config.address).await?;
    serve_with_listener(listener, state, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
