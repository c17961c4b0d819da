//! Error types for the Swiss tournament store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data directory error: {message}")]
    DataDir { message: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("uneven player count: {count} players cannot be paired")]
    UnevenPlayers { count: usize },
}
