// src/repositories/record_store.rs

use crate::domain::{MatchRecord, Player};
use crate::error::AppResult;

/// Persistence for the two tables.
///
/// A store with no backing data yet answers with empty tables instead of
/// failing. `save_all` rewrites both tables; there is no transaction
/// spanning them, so a crash in between can leave them out of step.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Players in insertion order
    fn load_players(&self) -> AppResult<Vec<Player>>;

    /// The full match log in stored order
    fn load_matches(&self) -> AppResult<Vec<MatchRecord>>;

    fn save_all(&self, players: &[Player], matches: &[MatchRecord]) -> AppResult<()>;
}
