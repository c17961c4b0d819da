//! Storage layer for the Swiss tournament store
//!
//! This module provides a thin abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations
//! - `pairings`: Next-round pairing over the standings

pub mod models;
pub mod pairings;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::TournamentDatabase;
