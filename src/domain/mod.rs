// src/domain/mod.rs
//
// Domain Root - entities, invariants and the derived-statistics engine.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod matches;
pub mod player;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Player Domain
pub use player::{validate_player, validate_new_player, Player};

// Match Domain
pub use matches::{
    is_unset_name, validate_match, Match, MatchRecord, MatchType, ScoredMatch, SetScore, Side,
    DATE_FORMAT, MAX_SETS, STANDARD_SET_SCORES, WINNERS_SEPARATOR,
};

// Statistics Domain (Derived Data)
pub use statistics::{
    check_consistency, compute_leaderboard, compute_player_profile, rank_leaderboard,
    Inconsistency, LeaderboardRow, PartnerRecord, PlayerProfile, SkippedRecord, Standings,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Player '{0}' already exists")]
    DuplicatePlayer(String),

    #[error("Player '{0}' is not registered")]
    UnknownPlayer(String),

    #[error("Malformed match record: {0}")]
    MalformedRecord(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
