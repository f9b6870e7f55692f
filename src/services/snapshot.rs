// src/services/snapshot.rs

use log::error;

use crate::domain::{MatchRecord, Player};
use crate::error::{AppError, AppResult};
use crate::repositories::RecordStore;

/// Both tables as read at the start of an interaction.
///
/// Passed explicitly to every service call; nothing is cached between
/// interactions.
#[derive(Debug, Clone, Default)]
pub struct LedgerSnapshot {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,

    /// Read failures replaced by empty tables, for the operator to see
    pub load_errors: Vec<String>,
}

impl LedgerSnapshot {
    /// Reads both tables. A table that cannot be read is logged, reported in
    /// `load_errors` and replaced by an empty one.
    pub fn load(store: &dyn RecordStore) -> Self {
        let mut load_errors = Vec::new();

        let players = store.load_players().unwrap_or_else(|e| {
            error!("Failed to load players: {}", e);
            load_errors.push(format!("Error loading players: {}", e));
            Vec::new()
        });
        let matches = store.load_matches().unwrap_or_else(|e| {
            error!("Failed to load matches: {}", e);
            load_errors.push(format!("Error loading matches: {}", e));
            Vec::new()
        });

        Self {
            players,
            matches,
            load_errors,
        }
    }

    /// True when some table was replaced by an empty default
    pub fn is_degraded(&self) -> bool {
        !self.load_errors.is_empty()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Persists the new tables and adopts them.
    ///
    /// Refused on a degraded snapshot: saving would overwrite the unreadable
    /// table with the empty default.
    pub fn replace(
        &mut self,
        store: &dyn RecordStore,
        players: Vec<Player>,
        matches: Vec<MatchRecord>,
    ) -> AppResult<()> {
        if self.is_degraded() {
            return Err(AppError::StorageUnavailable(self.load_errors.join("; ")));
        }
        store.save_all(&players, &matches)?;
        self.players = players;
        self.matches = matches;
        Ok(())
    }
}
