// src/lib.rs
// Courtbook - Local-first record keeper for a recreational tennis community
//
// Architecture:
// - Domain-centric: entities, invariants and the statistics engine live in `domain`
// - Stateless engine: every view is recomputed from the full match log
// - Explicit snapshots: each interaction loads both tables, nothing is cached
// - Event-driven confirmations: services emit one event per saved mutation
// - Application Layer: adapter boundary used by the CLI

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    check_consistency,
    compute_leaderboard,
    compute_player_profile,
    rank_leaderboard,
    validate_match,
    validate_player,
    DomainError,
    Inconsistency,
    LeaderboardRow,
    // Matches
    Match,
    MatchRecord,
    MatchType,
    PartnerRecord,
    // Players
    Player,
    PlayerProfile,
    SetScore,
    Side,
    SkippedRecord,
    // Statistics
    Standings,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent, EventBus, EventLogEntry, MatchDeleted, MatchRecorded, MatchUpdated, PlayerAdded,
    PlayerRemoved,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use config::{StorageBackend, StoreConfig};
pub use repositories::{CsvRecordStore, RecordStore, SqliteRecordStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Snapshot
    LedgerSnapshot,
    Leaderboard,
    // Match Service
    MatchService,
    // Player Service
    PlayerService,
    PlayerSummary,
    RecordMatchRequest,
    RemovePlayerRequest,
    // Statistics Service
    StatisticsService,
    UpdateMatchRequest,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
