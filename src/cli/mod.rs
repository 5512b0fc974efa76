//! CLI argument definitions and parsing.

use crate::{
    server::ServerConfig, types::filters::parse_date, LeagueId, Page, PerformanceId, PlayerId,
    TeamId,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Connection and output options for `get` commands
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// API base URL (or set `SWC_API_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Fail on the first error instead of retrying with backoff.
    #[clap(long, global = true)]
    pub no_retry: bool,

    /// Retry budget in seconds.
    #[clap(long, global = true, default_value_t = 30)]
    pub max_retry_secs: u64,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

/// Pagination shared by the list commands
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Number of records to skip.
    #[clap(long, default_value_t = 0)]
    pub skip: u32,

    /// Maximum number of records to return.
    #[clap(long, default_value_t = Page::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Only records changed on or after this date (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub since: Option<NaiveDate>,
}

impl PageArgs {
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.limit)
    }
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Check that the API is up
    Health,

    /// League, team and player totals
    Counts,

    /// List players
    Players {
        #[clap(flatten)]
        page: PageArgs,

        /// Exact first name.
        #[clap(long)]
        first_name: Option<String>,

        /// Exact last name.
        #[clap(long)]
        last_name: Option<String>,
    },

    /// Get one player with their performances
    Player { player_id: PlayerId },

    /// List weekly performances
    Performances {
        #[clap(flatten)]
        page: PageArgs,
    },

    /// Get one weekly performance
    Performance { performance_id: PerformanceId },

    /// List leagues
    Leagues {
        #[clap(flatten)]
        page: PageArgs,

        /// Exact league name.
        #[clap(long)]
        league_name: Option<String>,
    },

    /// Get one league with its teams
    League { league_id: LeagueId },

    /// List teams
    Teams {
        #[clap(flatten)]
        page: PageArgs,

        /// Exact team name.
        #[clap(long)]
        team_name: Option<String>,

        /// Only teams in this league.
        #[clap(long)]
        league_id: Option<LeagueId>,
    },

    /// Get one team with its roster
    Team { team_id: TeamId },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the read-only data API
    Serve {
        /// Address to listen on.
        #[clap(long, default_value_t = ServerConfig::default_address())]
        addr: SocketAddr,

        /// SQLite database file (or set `SWC_DATABASE_PATH` env var).
        #[clap(long)]
        database: Option<PathBuf>,
    },

    /// Query a running API through the client
    Get {
        #[clap(flatten)]
        client: ClientArgs,

        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "swc-ffl", about = "SportsWorldCentral fantasy football data API")]
pub struct SWC {
    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let app = SWC::try_parse_from(["swc-ffl", "serve"]).unwrap();
        match app.command {
            Commands::Serve { addr, database } => {
                assert_eq!(addr, ServerConfig::default_address());
                assert_eq!(addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
                assert!(database.is_none());
            }
            other => panic!("Expected serve command, got {:?}", other),
        }
    }

    #[test]
    fn test_get_players_with_filters() {
        let app = SWC::try_parse_from([
            "swc-ffl",
            "get",
            "players",
            "--first-name",
            "Bryce",
            "--since",
            "2024-01-01",
            "--limit",
            "10",
            "--no-retry",
        ])
        .unwrap();

        match app.command {
            Commands::Get { client, cmd } => {
                assert!(client.no_retry);
                assert_eq!(client.max_retry_secs, 30);
                match cmd {
                    GetCmd::Players {
                        page,
                        first_name,
                        last_name,
                    } => {
                        assert_eq!(first_name.as_deref(), Some("Bryce"));
                        assert!(last_name.is_none());
                        assert_eq!(page.page(), Page::new(0, 10));
                        assert_eq!(page.since, NaiveDate::from_ymd_opt(2024, 1, 1));
                    }
                    other => panic!("Expected players command, got {:?}", other),
                }
            }
            other => panic!("Expected get command, got {:?}", other),
        }
    }

    #[test]
    fn test_get_league_by_id() {
        let app = SWC::try_parse_from(["swc-ffl", "get", "league", "5002", "--json"]).unwrap();
        match app.command {
            Commands::Get { client, cmd } => {
                assert!(client.json);
                assert!(matches!(cmd, GetCmd::League { league_id } if league_id == LeagueId::new(5002)));
            }
            other => panic!("Expected get command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(SWC::try_parse_from(["swc-ffl", "get", "players", "--since", "04/01/2024"]).is_err());
        assert!(SWC::try_parse_from(["swc-ffl", "get", "player", "abc"]).is_err());
        assert!(SWC::try_parse_from(["swc-ffl", "get", "teams", "--skip", "-1"]).is_err());
    }
}
