//! Next-round pairing over the current standings

use super::{models::*, schema::TournamentDatabase};
use crate::error::TournamentError;
use anyhow::Result;

impl TournamentDatabase {
    /// Pairs of players for the next round of matches
    ///
    /// Takes the standings order and pairs adjacent entries, so each player
    /// meets an opponent with an equal or nearly-equal win record: rank 1
    /// against rank 2, rank 3 against rank 4, and so on.
    ///
    /// An odd number of registered players cannot be paired; that case fails
    /// with [`TournamentError::UnevenPlayers`] rather than silently dropping
    /// the last-ranked player.
    pub fn pairings(&self) -> Result<Vec<Pairing>> {
        let standings = self.standings()?;

        if standings.len() % 2 != 0 {
            return Err(TournamentError::UnevenPlayers {
                count: standings.len(),
            }
            .into());
        }

        let next_round = standings
            .chunks_exact(2)
            .map(|pair| Pairing {
                first_id: pair[0].id,
                first_name: pair[0].name.clone(),
                second_id: pair[1].id,
                second_name: pair[1].name.clone(),
            })
            .collect();

        Ok(next_round)
    }
}
