//! Command implementations for the swc-ffl CLI

pub mod query;
pub mod serve;


use crate::{
    client::config::BASE_URL_ENV_VAR, error::SwcError, storage::FantasyDatabase, Result,
    DATABASE_PATH_ENV_VAR,
};
use std::path::PathBuf;

/// Resolve the API base URL from the flag or the environment
pub fn resolve_base_url(base_url: Option<String>) -> Result<String> {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| SwcError::MissingBaseUrl {
            env_var: BASE_URL_ENV_VAR.to_string(),
        })
}

/// Resolve the database file from the flag, the environment, or the default location
pub fn resolve_database_path(database: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = database {
        return Ok(path);
    }
    match std::env::var_os(DATABASE_PATH_ENV_VAR) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(FantasyDatabase::default_path()?),
    }
}
