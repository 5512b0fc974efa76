//! `swc-ffl serve`

use super::resolve_database_path;
use crate::{
    server::{self, ServerConfig},
    Result,
};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Handle the serve command
pub async fn handle_serve(addr: SocketAddr, database: Option<PathBuf>) -> Result<()> {
    let database_path = resolve_database_path(database)?;
    let config = ServerConfig {
        address: addr,
        database_path,
    };
    // tarpaulin::skip - runs until Ctrl-C, covered by the API integration tests
    server::serve(config).await
}
