//! Swiss Tournament Store
//!
//! A thin data-access library over a SQLite schema for running a
//! Swiss-system tournament: register players, report match results, read
//! standings, and compute adjacent pairings for the next round.
//!
//! ## Features
//!
//! - **Player registry**: register players and count registrations
//! - **Match reporting**: record winner/loser results with referential
//!   integrity enforced by the store
//! - **Standings**: players joined with win and match counts, sorted by wins
//! - **Pairings**: adjacent pairing over the standings for the next round
//!
//! ## Quick Start
//!
//! ```rust
//! use swiss_tournament::TournamentDatabase;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut db = TournamentDatabase::open_in_memory()?;
//!
//! let alice = db.register_player("Alice")?;
//! let bruno = db.register_player("Bruno")?;
//! db.report_match(alice, bruno)?;
//!
//! for standing in db.standings()? {
//!     println!("{}: {} wins", standing.name, standing.wins);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Each operation runs a single SQL statement on a connection owned by
//! [`TournamentDatabase`]; the connection is released when the database value
//! is dropped. Failures from the store propagate to the caller as
//! [`TournamentError`] values, with no retries and no partial commits.

pub mod error;
pub mod storage;

// Re-export commonly used types
pub use error::{Result, TournamentError};
pub use storage::{Pairing, Player, PlayerId, Standing, TournamentDatabase};
