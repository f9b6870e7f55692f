use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::matches::Side;

/// A stored row the engine could not interpret
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Zero-based position in the match log
    pub index: usize,
    pub reason: String,
}

/// Totals per player name across the whole log.
///
/// Names only appear once they have played; a player without matches is
/// absent rather than zero. `match_wins` only lists players with a win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub points: HashMap<String, u32>,
    pub match_wins: HashMap<String, u32>,
    pub games_won: HashMap<String, u32>,

    /// Names in the order they first earned points
    pub order: Vec<String>,

    pub skipped: Vec<SkippedRecord>,
}

impl Standings {
    pub fn points_of(&self, name: &str) -> u32 {
        self.points.get(name).copied().unwrap_or(0)
    }

    pub fn match_wins_of(&self, name: &str) -> u32 {
        self.match_wins.get(name).copied().unwrap_or(0)
    }

    pub fn games_won_of(&self, name: &str) -> u32 {
        self.games_won.get(name).copied().unwrap_or(0)
    }

    pub fn total_points(&self) -> u32 {
        self.points.values().sum()
    }
}

/// One ranked line of the leaderboard with the full metric set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// 1-based position; equal stats still get distinct ranks
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub match_wins: u32,
    pub games_won: u32,
}

/// Doubles record with one teammate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub name: String,
    pub wins: u32,
    pub total: u32,
}

impl PartnerRecord {
    pub fn win_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total)
        }
    }
}

/// Relational stats for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player: String,

    /// Distinct calendar days with at least one match
    pub frequency_days: usize,

    /// Teammates in first-encountered order
    pub partners: Vec<PartnerRecord>,

    pub best_partner: Option<String>,

    pub skipped: Vec<SkippedRecord>,
}

impl PlayerProfile {
    pub fn partner_names(&self) -> Vec<&str> {
        self.partners.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn partner(&self, name: &str) -> Option<&PartnerRecord> {
        self.partners.iter().find(|p| p.name == name)
    }
}

/// A match whose stored winners disagree with its set scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inconsistency {
    pub index: usize,
    pub label: String,

    /// Side named by the stored winners, if they form a whole team
    pub recorded_winner: Option<Side>,

    /// Side that won more of the parseable sets
    pub winner_by_sets: Side,
}
