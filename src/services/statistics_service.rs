// src/services/statistics_service.rs

use serde::Serialize;

use crate::domain::{
    check_consistency, compute_leaderboard, compute_player_profile, is_unset_name,
    rank_leaderboard, DomainError, Inconsistency, LeaderboardRow, PlayerProfile, SkippedRecord,
};
use crate::error::{AppError, AppResult};
use crate::services::LedgerSnapshot;

#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub rows: Vec<LeaderboardRow>,
    pub skipped: Vec<SkippedRecord>,
}

/// Totals and partnerships for one player
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub points: u32,
    pub match_wins: u32,
    pub games_won: u32,
    pub profile: PlayerProfile,
}

/// Read-only views derived from the whole match log on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsService;

impl StatisticsService {
    pub fn new() -> Self {
        Self
    }

    pub fn leaderboard(&self, snapshot: &LedgerSnapshot) -> Leaderboard {
        let standings = compute_leaderboard(&snapshot.matches);
        Leaderboard {
            rows: rank_leaderboard(&standings),
            skipped: standings.skipped,
        }
    }

    /// Works for removed players too, as long as the log still names them.
    pub fn player_summary(&self, snapshot: &LedgerSnapshot, name: &str) -> AppResult<PlayerSummary> {
        let name = name.trim();
        let known = !is_unset_name(name)
            && (snapshot.has_player(name) || snapshot.matches.iter().any(|m| m.involves(name)));
        if !known {
            return Err(AppError::Domain(DomainError::UnknownPlayer(name.to_string())));
        }

        let standings = compute_leaderboard(&snapshot.matches);
        Ok(PlayerSummary {
            name: name.to_string(),
            points: standings.points_of(name),
            match_wins: standings.match_wins_of(name),
            games_won: standings.games_won_of(name),
            profile: compute_player_profile(name, &snapshot.matches),
        })
    }

    pub fn consistency_report(&self, snapshot: &LedgerSnapshot) -> Vec<Inconsistency> {
        check_consistency(&snapshot.matches)
    }
}
