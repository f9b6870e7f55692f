//! Derived statistics over the match log.
//!
//! 1. Statistics are ALWAYS derived from the full log, NEVER stored
//! 2. Every call recomputes from scratch; there is no cache to invalidate
//! 3. Statistics NEVER alter the log
//! 4. Scoring keys off the names stored in match rows, not the live roster
//! 5. A malformed row is skipped and reported; it never stops the others

pub mod aggregation;
pub mod consistency;
pub mod entity;
pub mod profile;

pub use aggregation::{compute_leaderboard, rank_leaderboard, LOSS_POINTS, WIN_POINTS};
pub use consistency::check_consistency;
pub use entity::{
    Inconsistency, LeaderboardRow, PartnerRecord, PlayerProfile, SkippedRecord, Standings,
};
pub use profile::compute_player_profile;
