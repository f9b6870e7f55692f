// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// One interaction = load a snapshot, apply at most one mutation,
// persist it, emit one event. Statistics are computed from the snapshot.

pub mod match_service;
pub mod player_service;
pub mod snapshot;
pub mod statistics_service;

pub use match_service::{MatchService, RecordMatchRequest, UpdateMatchRequest};
pub use player_service::{PlayerService, RemovePlayerRequest};
pub use snapshot::LedgerSnapshot;
pub use statistics_service::{Leaderboard, PlayerSummary, StatisticsService};
