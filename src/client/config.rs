//! Client configuration

use super::retry::RetryOn;
use crate::error::{Result, SwcError};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const BASE_URL_ENV_VAR: &str = "SWC_API_BASE_URL";
pub const BACKOFF_ENV_VAR: &str = "SWC_BACKOFF";
pub const BACKOFF_MAX_TIME_ENV_VAR: &str = "SWC_BACKOFF_MAX_TIME";
pub const BULK_FILE_FORMAT_ENV_VAR: &str = "SWC_BULK_FILE_FORMAT";

/// File format of the bulk export files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulkFileFormat {
    #[default]
    Csv,
    Parquet,
}

impl BulkFileFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            BulkFileFormat::Csv => "csv",
            BulkFileFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for BulkFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for BulkFileFormat {
    type Err = SwcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(BulkFileFormat::Csv),
            "parquet" => Ok(BulkFileFormat::Parquet),
            _ => Err(SwcError::InvalidBulkFileFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Bulk export file stems, keyed by dataset name
const BULK_FILE_STEMS: [(&str, &str); 5] = [
    ("players", "player_data"),
    ("leagues", "league_data"),
    ("performances", "performance_data"),
    ("teams", "team_data"),
    ("team_players", "team_player_data"),
];

/// Configuration for [`SwcClient`](super::SwcClient).
///
/// Immutable once handed to the client.
///
/// ```
/// # use swc_ffl::client::{BulkFileFormat, SwcConfig};
/// let config = SwcConfig::new("http://localhost:8000")
///     .retry_enabled(false)
///     .bulk_file_format(BulkFileFormat::Parquet);
/// assert!(!config.is_retry_enabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwcConfig {
    base_url: String,
    retry_enabled: bool,
    retry_max_elapsed: Duration,
    retry_base_delay: Duration,
    retry_on: RetryOn,
    bulk_file_format: BulkFileFormat,
}

impl SwcConfig {
    pub const DEFAULT_RETRY_MAX_ELAPSED: Duration = Duration::from_secs(30);
    pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            retry_enabled: true,
            retry_max_elapsed: Self::DEFAULT_RETRY_MAX_ELAPSED,
            retry_base_delay: Self::DEFAULT_RETRY_BASE_DELAY,
            retry_on: RetryOn::default(),
            bulk_file_format: BulkFileFormat::default(),
        }
    }

    /// Build a configuration from `SWC_*` environment variables.
    ///
    /// `SWC_API_BASE_URL` is required; the other variables fall back to the
    /// defaults of [`SwcConfig::new`].
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV_VAR).map_err(|_| SwcError::MissingBaseUrl {
            env_var: BASE_URL_ENV_VAR.to_string(),
        })?;
        let mut config = Self::new(base_url);

        if let Ok(value) = std::env::var(BACKOFF_ENV_VAR) {
            config.retry_enabled = parse_bool(BACKOFF_ENV_VAR, &value)?;
        }
        if let Ok(value) = std::env::var(BACKOFF_MAX_TIME_ENV_VAR) {
            let seconds: u64 = value.trim().parse().map_err(|_| SwcError::InvalidSetting {
                name: BACKOFF_MAX_TIME_ENV_VAR.to_string(),
                value: value.clone(),
            })?;
            config.retry_max_elapsed = Duration::from_secs(seconds);
        }
        if let Ok(value) = std::env::var(BULK_FILE_FORMAT_ENV_VAR) {
            config.bulk_file_format = value.parse()?;
        }
        Ok(config)
    }

    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        self.retry_enabled = enabled;
        self
    }

    /// Total time budget for retrying one call
    pub fn retry_max_elapsed(mut self, budget: Duration) -> Self {
        self.retry_max_elapsed = budget;
        self
    }

    /// First backoff delay; doubles with every further attempt
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn retry_on(mut self, retry_on: RetryOn) -> Self {
        self.retry_on = retry_on;
        self
    }

    pub fn bulk_file_format(mut self, format: BulkFileFormat) -> Self {
        self.bulk_file_format = format;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_retry_enabled(&self) -> bool {
        self.retry_enabled
    }

    pub fn max_elapsed(&self) -> Duration {
        self.retry_max_elapsed
    }

    pub fn base_delay(&self) -> Duration {
        self.retry_base_delay
    }

    pub fn retry_policy(&self) -> RetryOn {
        self.retry_on
    }

    pub fn file_format(&self) -> BulkFileFormat {
        self.bulk_file_format
    }

    /// Bulk export file names for the configured format,
    /// e.g. `players -> player_data.csv`
    pub fn bulk_file_names(&self) -> BTreeMap<&'static str, String> {
        BULK_FILE_STEMS
            .iter()
            .map(|(key, stem)| (*key, format!("{}.{}", stem, self.bulk_file_format.extension())))
            .collect()
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| SwcError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SwcError::InvalidBaseUrl {
                url: self.base_url.clone(),
                message: format!("unsupported scheme {}", other),
            }),
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SwcError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
