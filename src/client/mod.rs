//! Typed HTTP client for the fantasy football data API
//!
//! [`SwcClient`] wraps every endpoint with a typed call. Failed calls are
//! retried with exponential backoff and jitter within a time budget, and
//! response bodies are decoded into the entity types from [`crate::types`].
//!
//! ```rust,no_run
//! use swc_ffl::client::{SwcClient, SwcConfig};
//! use swc_ffl::{Page, PlayerFilter};
//!
//! # async fn example() -> swc_ffl::Result<()> {
//! let client = SwcClient::new(SwcConfig::new("http://localhost:8000"))?;
//! let counts = client.get_counts().await?;
//! println!("{} players", counts.player_count);
//!
//! let bryces = client
//!     .list_players(&PlayerFilter::default().first_name("Bryce"), Page::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod retry;


pub use config::{BulkFileFormat, SwcConfig};
pub use retry::{Backoff, RetryOn};

use crate::{
    error::Result,
    types::{
        Counts, League, LeagueFilter, LeagueId, Page, Performance, PerformanceFilter,
        PerformanceId, Player, PlayerFilter, PlayerId, Team, TeamFilter, TeamId,
    },
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Per-call timeout, independent of the retry budget.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const HEALTH_CHECK_ENDPOINT: &str = "/";
pub const LIST_LEAGUES_ENDPOINT: &str = "/v0/leagues/";
pub const LIST_PLAYERS_ENDPOINT: &str = "/v0/players/";
pub const LIST_PERFORMANCES_ENDPOINT: &str = "/v0/performances/";
pub const LIST_TEAMS_ENDPOINT: &str = "/v0/teams/";
pub const GET_COUNTS_ENDPOINT: &str = "/v0/counts/";

/// Client for the `/v0` API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SwcClient {
    http: reqwest::Client,
    config: SwcConfig,
}

impl SwcClient {
    pub fn new(config: SwcConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        tracing::debug!(
            base_url = config.base_url(),
            retry_enabled = config.is_retry_enabled(),
            retry_max_elapsed_secs = config.max_elapsed().as_secs(),
            bulk_file_format = %config.file_format(),
            "created API client"
        );
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SwcConfig {
        &self.config
    }

    /// Bulk export file names for the configured format
    pub fn bulk_file_names(&self) -> BTreeMap<&'static str, String> {
        self.config.bulk_file_names()
    }

    /// Call `path` and return the parsed JSON body unmodified.
    ///
    /// Transport failures and error statuses are retried per the configured
    /// policy and surface as [`SwcError::Request`](crate::SwcError::Request).
    /// A body that is not JSON surfaces as
    /// [`SwcError::Decode`](crate::SwcError::Decode) and is never retried.
    pub async fn invoke(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url().trim_end_matches('/'), path);

        let body = if self.config.is_retry_enabled() {
            self.send_with_retry(&method, &url, query).await?
        } else {
            self.send(&method, &url, query).await?
        };

        Ok(serde_json::from_slice(&body)?)
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        query: &[(&str, String)],
    ) -> reqwest::Result<Vec<u8>> {
        tracing::debug!(%method, url, "calling API");
        let response = self
            .http
            .request(method.clone(), url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn send_with_retry(
        &self,
        method: &Method,
        url: &str,
        query: &[(&str, String)],
    ) -> reqwest::Result<Vec<u8>> {
        let policy = self.config.retry_policy();
        let mut backoff = Backoff::new(self.config.base_delay(), self.config.max_elapsed());
        let mut attempt: u32 = 1;

        loop {
            let err = match self.send(method, url, query).await {
                Ok(body) => return Ok(body),
                Err(err) => err,
            };

            if !policy.should_retry(&err) {
                return Err(err);
            }

            match backoff.next_delay() {
                Some(delay) => {
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "API call failed, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                None => {
                    tracing::warn!(
                        attempts = attempt,
                        elapsed_ms = backoff.elapsed().as_millis() as u64,
                        error = %err,
                        "giving up on API call"
                    );
                    return Err(err);
                }
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let data = self.invoke(Method::GET, path, query).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Check the health of the API
    pub async fn get_health_check(&self) -> Result<Value> {
        self.invoke(Method::GET, HEALTH_CHECK_ENDPOINT, &[]).await
    }

    /// Get counts of leagues, teams, and players
    pub async fn get_counts(&self) -> Result<Counts> {
        self.get(GET_COUNTS_ENDPOINT, &[]).await
    }

    pub async fn list_players(&self, filter: &PlayerFilter, page: Page) -> Result<Vec<Player>> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        self.get(LIST_PLAYERS_ENDPOINT, &query).await
    }

    pub async fn get_player(&self, player_id: PlayerId) -> Result<Player> {
        self.get(&format!("{LIST_PLAYERS_ENDPOINT}{player_id}"), &[])
            .await
    }

    pub async fn list_performances(
        &self,
        filter: &PerformanceFilter,
        page: Page,
    ) -> Result<Vec<Performance>> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        self.get(LIST_PERFORMANCES_ENDPOINT, &query).await
    }

    pub async fn get_performance(&self, performance_id: PerformanceId) -> Result<Performance> {
        self.get(&format!("{LIST_PERFORMANCES_ENDPOINT}{performance_id}"), &[])
            .await
    }

    pub async fn list_leagues(&self, filter: &LeagueFilter, page: Page) -> Result<Vec<League>> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        self.get(LIST_LEAGUES_ENDPOINT, &query).await
    }

    pub async fn get_league(&self, league_id: LeagueId) -> Result<League> {
        self.get(&format!("{LIST_LEAGUES_ENDPOINT}{league_id}"), &[])
            .await
    }

    pub async fn list_teams(&self, filter: &TeamFilter, page: Page) -> Result<Vec<Team>> {
        let mut query = page.query_pairs();
        query.extend(filter.query_pairs());
        self.get(LIST_TEAMS_ENDPOINT, &query).await
    }

    pub async fn get_team(&self, team_id: TeamId) -> Result<Team> {
        self.get(&format!("{LIST_TEAMS_ENDPOINT}{team_id}"), &[]).await
    }
}
