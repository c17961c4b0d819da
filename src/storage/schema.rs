//! Database schema and connection management

use crate::error::TournamentError;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for tournament data
pub struct TournamentDatabase {
    pub(crate) conn: Connection,
}

impl TournamentDatabase {
    /// Open the database at its default location and ensure the schema exists
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(&db_path)
    }

    /// Open (or create) a database at the given path and ensure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        log::debug!("tournament database opened at {}", path.as_ref().display());
        Ok(db)
    }

    /// Open an in-memory database, useful for tests and throwaway tournaments
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the default database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| TournamentError::DataDir {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("swiss-tournament").join("tournament.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Match rows reference players; enforce that at the store level
        self.conn.execute_batch("PRAGMA foreign_keys = ON")?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id     INTEGER PRIMARY KEY AUTOINCREMENT,
                winner INTEGER NOT NULL REFERENCES players(id),
                loser  INTEGER NOT NULL REFERENCES players(id)
            )",
            [],
        )?;

        // Aggregate views backing the standings query; players with no
        // matches keep a row with a zero count
        self.conn.execute(
            "CREATE VIEW IF NOT EXISTS win_counts AS
             SELECT p.id AS id, COUNT(m.id) AS wins
             FROM players p
             LEFT JOIN matches m ON m.winner = p.id
             GROUP BY p.id",
            [],
        )?;

        self.conn.execute(
            "CREATE VIEW IF NOT EXISTS match_counts AS
             SELECT p.id AS id, COUNT(m.id) AS matches
             FROM players p
             LEFT JOIN matches m ON m.winner = p.id OR m.loser = p.id
             GROUP BY p.id",
            [],
        )?;

        Ok(())
    }
}
