//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use swc_ffl::{
    cli::{Commands, SWC},
    commands::{query::handle_get, serve::handle_serve},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swc_ffl=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = SWC::parse();

    match app.command {
        Commands::Serve { addr, database } => handle_serve(addr, database).await?,
        Commands::Get { client, cmd } => handle_get(client, cmd).await?,
    }

    Ok(())
}
