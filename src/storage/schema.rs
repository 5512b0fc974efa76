//! Database schema and connection management

use crate::error::SwcError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Connection to the fantasy football record store
pub struct FantasyDatabase {
    pub(crate) conn: Connection,
}

impl FantasyDatabase {
    /// Open the database at the default location, creating it if needed
    pub fn new() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an existing database file for reads only.
    ///
    /// The schema is not touched; the file must already have been created by
    /// [`FantasyDatabase::open`].
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Create a private in-memory database with the full schema
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database file: `<data dir>/swc-ffl/fantasy_football.db`
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| SwcError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("swc-ffl").join("fantasy_football.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS league (
                league_id INTEGER PRIMARY KEY,
                league_name TEXT NOT NULL,
                scoring_type TEXT NOT NULL,
                last_changed_date TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team (
                team_id INTEGER PRIMARY KEY,
                team_name TEXT NOT NULL,
                league_id INTEGER NOT NULL,
                last_changed_date TEXT NOT NULL,
                FOREIGN KEY (league_id) REFERENCES league(league_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player (
                player_id INTEGER PRIMARY KEY,
                gsis_id TEXT UNIQUE,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                position TEXT NOT NULL,
                last_changed_date TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS performance (
                performance_id INTEGER PRIMARY KEY,
                week_number TEXT NOT NULL,
                fantasy_points INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                last_changed_date TEXT NOT NULL,
                FOREIGN KEY (player_id) REFERENCES player(player_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_player (
                team_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                last_changed_date TEXT NOT NULL,
                PRIMARY KEY (team_id, player_id),
                FOREIGN KEY (team_id) REFERENCES team(team_id),
                FOREIGN KEY (player_id) REFERENCES player(player_id)
            )",
            [],
        )?;

        // Lookups behind the nested collections
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_league ON team(league_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_performance_player ON performance(player_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_team_player_player ON team_player(player_id)",
            [],
        )?;

        Ok(())
    }
}
