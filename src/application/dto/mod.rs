// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - DTOs are adapter-friendly, serializable views
// - Conversion FROM domain/service values, except for entry-form input
// - Match positions are 1-based everywhere

use serde::{Deserialize, Serialize};

use crate::domain::{
    Inconsistency, LeaderboardRow, MatchRecord, PartnerRecord, Player, SkippedRecord,
};
use crate::services::{Leaderboard, PlayerSummary};

/// Envelope for successful command results.
/// `warnings` carries storage read failures the result was computed despite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
    pub warnings: Vec<String>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            data,
            warnings,
        }
    }
}

// ============================================================================
// PLAYER DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub name: String,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePlayerDto {
    pub name: String,
    #[serde(default)]
    pub keep_matches: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovedPlayerDto {
    pub name: String,
    pub matches_removed: usize,
}

// ============================================================================
// MATCH DTOs
// ============================================================================

/// One history entry, with blank slots and sets left out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDto {
    pub position: usize,
    pub label: String,
    pub date: String,
    pub match_type: String,
    pub players: Vec<String>,
    pub sets: Vec<String>,
    pub winners: Vec<String>,
}

impl MatchDto {
    pub fn from_record(position: usize, record: &MatchRecord) -> Self {
        Self {
            position,
            label: record.label(),
            date: record.date.clone(),
            match_type: record.match_type.clone(),
            players: record.slots().iter().flatten().map(|s| s.to_string()).collect(),
            sets: record.sets().iter().flatten().map(|s| s.to_string()).collect(),
            winners: record
                .winner_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Entry form as typed by the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchDto {
    /// `YYYY-MM-DD`
    pub date: String,

    /// `Singles` or `Doubles`
    pub match_type: String,

    pub players: Vec<String>,

    /// Scores like `6-4`; blank entries are sets not played
    #[serde(default)]
    pub sets: Vec<String>,

    /// `A`/`B` (or `1`/`2`)
    pub winner: String,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRowDto {
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub match_wins: u32,
    pub games_won: u32,
}

impl From<&LeaderboardRow> for LeaderboardRowDto {
    fn from(row: &LeaderboardRow) -> Self {
        Self {
            rank: row.rank,
            name: row.name.clone(),
            points: row.points,
            match_wins: row.match_wins,
            games_won: row.games_won,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedMatchDto {
    pub position: usize,
    pub reason: String,
}

impl From<&SkippedRecord> for SkippedMatchDto {
    fn from(skipped: &SkippedRecord) -> Self {
        Self {
            position: skipped.index + 1,
            reason: skipped.reason.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardDto {
    pub rows: Vec<LeaderboardRowDto>,
    pub skipped: Vec<SkippedMatchDto>,
}

impl From<Leaderboard> for LeaderboardDto {
    fn from(board: Leaderboard) -> Self {
        Self {
            rows: board.rows.iter().map(LeaderboardRowDto::from).collect(),
            skipped: board.skipped.iter().map(SkippedMatchDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerDto {
    pub name: String,
    pub wins: u32,
    pub total: u32,
    pub win_ratio: f64,
}

impl From<&PartnerRecord> for PartnerDto {
    fn from(partner: &PartnerRecord) -> Self {
        Self {
            name: partner.name.clone(),
            wins: partner.wins,
            total: partner.total,
            win_ratio: partner.win_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummaryDto {
    pub name: String,
    pub points: u32,
    pub match_wins: u32,
    pub games_won: u32,
    pub frequency_days: usize,
    pub partners: Vec<PartnerDto>,
    pub best_partner: Option<String>,
    pub skipped: Vec<SkippedMatchDto>,
}

impl From<PlayerSummary> for PlayerSummaryDto {
    fn from(summary: PlayerSummary) -> Self {
        Self {
            name: summary.name,
            points: summary.points,
            match_wins: summary.match_wins,
            games_won: summary.games_won,
            frequency_days: summary.profile.frequency_days,
            partners: summary.profile.partners.iter().map(PartnerDto::from).collect(),
            best_partner: summary.profile.best_partner,
            skipped: summary.profile.skipped.iter().map(SkippedMatchDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InconsistencyDto {
    pub position: usize,
    pub label: String,

    /// `None` when the stored winners are not one whole side
    pub recorded_winner: Option<String>,
    pub winner_by_sets: String,
}

impl From<&Inconsistency> for InconsistencyDto {
    fn from(entry: &Inconsistency) -> Self {
        Self {
            position: entry.index + 1,
            label: entry.label.clone(),
            recorded_winner: entry.recorded_winner.map(|side| side.to_string()),
            winner_by_sets: entry.winner_by_sets.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_dto_drops_blank_slots() {
        let record = MatchRecord {
            date: "2024-05-01".to_string(),
            match_type: "Singles".to_string(),
            player1: Some("Ana".to_string()),
            player2: Some("Bruno".to_string()),
            player3: Some("nan".to_string()),
            set1: Some("6-4".to_string()),
            set2: Some(" ".to_string()),
            winners: Some("Ana".to_string()),
            ..Default::default()
        };

        let dto = MatchDto::from_record(3, &record);

        assert_eq!(dto.position, 3);
        assert_eq!(dto.players, vec!["Ana", "Bruno"]);
        assert_eq!(dto.sets, vec!["6-4"]);
        assert_eq!(dto.winners, vec!["Ana"]);
        assert_eq!(dto.label, "2024-05-01 - Singles - Ana vs Bruno");
    }

    #[test]
    fn test_positions_are_one_based() {
        let skipped = SkippedRecord {
            index: 0,
            reason: "bad date".to_string(),
        };
        assert_eq!(SkippedMatchDto::from(&skipped).position, 1);
    }

    #[test]
    fn test_success_response_serializes() {
        let response = SuccessResponse::new(PlayerDto { name: "Ana".to_string() }, Vec::new());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"name\":\"Ana\""));
    }
}
