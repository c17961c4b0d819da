//! Basic database query operations

use super::{models::*, schema::TournamentDatabase};
use anyhow::Result;
use rusqlite::params;

impl TournamentDatabase {
    /// Remove all match records from the database
    pub fn clear_matches(&mut self) -> Result<()> {
        let deleted = self.conn.execute("DELETE FROM matches", [])?;
        log::debug!("cleared {deleted} match records");
        Ok(())
    }

    /// Remove all player records from the database
    ///
    /// Matches reference players, so any remaining match rows make this fail
    /// with a foreign-key violation; call [`clear_matches`] first.
    ///
    /// [`clear_matches`]: TournamentDatabase::clear_matches
    pub fn clear_players(&mut self) -> Result<()> {
        let deleted = self.conn.execute("DELETE FROM players", [])?;
        log::debug!("cleared {deleted} player records");
        Ok(())
    }

    /// Number of players currently registered
    pub fn count_players(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT count(id) FROM players", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Register a player, returning the id the database assigned
    ///
    /// Names need not be unique; registering the same name twice creates two
    /// players.
    pub fn register_player(&mut self, name: &str) -> Result<PlayerId> {
        self.conn
            .execute("INSERT INTO players (name) VALUES (?)", params![name])?;
        Ok(PlayerId::new(self.conn.last_insert_rowid()))
    }

    /// Record the outcome of a single match between two players
    ///
    /// Both ids must refer to registered players or the store rejects the
    /// row. Whether winner and loser differ is not checked.
    pub fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<()> {
        self.conn.execute(
            "INSERT INTO matches (winner, loser) VALUES (?, ?)",
            params![winner.as_i64(), loser.as_i64()],
        )?;
        Ok(())
    }

    /// Players and their win records, sorted by wins descending
    ///
    /// Players with no matches appear with zero wins and zero matches. Ties
    /// on wins are ordered by registration id, so the order is stable across
    /// calls.
    pub fn standings(&self) -> Result<Vec<Standing>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.id, p.name, w.wins, c.matches
             FROM players p
             JOIN win_counts w ON w.id = p.id
             JOIN match_counts c ON c.id = p.id
             ORDER BY w.wins DESC, p.id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Standing {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?;

        let mut standings = Vec::new();
        for row in rows {
            standings.push(row?);
        }
        Ok(standings)
    }
}
