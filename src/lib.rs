//! SportsWorldCentral Fantasy Football Data Library
//!
//! A read-only data API for fantasy football reference data (players, teams,
//! leagues and weekly performances) backed by SQLite, plus a typed client
//! for the same endpoints.
//!
//! ## Features
//!
//! - **Query Layer**: Filtered, primary-key ordered, paginated reads from the record store
//! - **HTTP API**: The `/v0` endpoints served with axum
//! - **Typed Client**: Call-and-decode wrappers with exponential backoff and jitter
//! - **CLI**: `swc-ffl serve` to run the API, `swc-ffl get ...` to query it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swc_ffl::{client::{SwcClient, SwcConfig}, LeagueId};
//!
//! # async fn example() -> swc_ffl::Result<()> {
//! let client = SwcClient::new(SwcConfig::new("http://localhost:8000"))?;
//! let league = client.get_league(LeagueId::new(5002)).await?;
//! println!("{} has {} teams", league.league_name, league.teams.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SWC_API_BASE_URL=http://localhost:8000
//! export SWC_DATABASE_PATH=./fantasy_football.db
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod server;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SwcError};
pub use types::{
    Counts, EntityKind, League, LeagueFilter, LeagueId, Page, Performance, PerformanceFilter,
    PerformanceId, Player, PlayerBase, PlayerFilter, PlayerId, Team, TeamBase, TeamFilter, TeamId,
    TeamPlayer, TeamPlayerFilter,
};

pub const DATABASE_PATH_ENV_VAR: &str = "SWC_DATABASE_PATH";
