// src/domain/statistics/profile.rs

use std::collections::HashSet;

use log::debug;

use super::entity::{PartnerRecord, PlayerProfile, SkippedRecord};
use crate::domain::matches::{MatchRecord, ScoredMatch};

/// Frequency and doubles partnerships for `player`.
///
/// Singles count toward the frequency only, and so does a doubles row whose
/// teammate slot is blank. The best partner is the teammate with the
/// highest win ratio; on equal ratios the partner met first wins.
pub fn compute_player_profile(player: &str, matches: &[MatchRecord]) -> PlayerProfile {
    let mut profile = PlayerProfile {
        player: player.to_string(),
        ..Default::default()
    };
    let mut days = HashSet::new();

    for (index, record) in matches.iter().enumerate() {
        if !record.involves(player) {
            continue;
        }
        let m = match ScoredMatch::try_from(record) {
            Ok(m) => m,
            Err(e) => {
                debug!("Skipping match #{} in profile of {}: {}", index + 1, player, e);
                profile.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        days.insert(m.day());

        let Some(teammate) = m.teammate_of(player) else {
            continue;
        };
        let won = m.won_by(player);
        match profile.partners.iter_mut().find(|p| p.name == teammate) {
            Some(entry) => {
                entry.total += 1;
                entry.wins += u32::from(won);
            }
            None => profile.partners.push(PartnerRecord {
                name: teammate.to_string(),
                wins: u32::from(won),
                total: 1,
            }),
        }
    }

    profile.frequency_days = days.len();
    profile.best_partner = best_partner(&profile.partners).map(|p| p.name.clone());
    profile
}

/// Highest wins/total; partners without shared matches never qualify
fn best_partner(partners: &[PartnerRecord]) -> Option<&PartnerRecord> {
    let mut best: Option<&PartnerRecord> = None;
    for candidate in partners.iter().filter(|p| p.total > 0) {
        let better = match best {
            None => true,
            // wins_c / total_c > wins_b / total_b without floating point
            Some(current) => {
                u64::from(candidate.wins) * u64::from(current.total)
                    > u64::from(current.wins) * u64::from(candidate.total)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doubles(date: &str, players: [&str; 4], winners: &str) -> MatchRecord {
        MatchRecord {
            date: date.to_string(),
            match_type: "Doubles".to_string(),
            player1: Some(players[0].to_string()),
            player2: Some(players[1].to_string()),
            player3: Some(players[2].to_string()),
            player4: Some(players[3].to_string()),
            set1: Some("6-4".to_string()),
            winners: Some(winners.to_string()),
            ..Default::default()
        }
    }

    fn singles(date: &str, p1: &str, p2: &str, winner: &str) -> MatchRecord {
        MatchRecord {
            date: date.to_string(),
            match_type: "Singles".to_string(),
            player1: Some(p1.to_string()),
            player2: Some(p2.to_string()),
            set1: Some("6-4".to_string()),
            winners: Some(winner.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_doubles_partner() {
        let log = vec![doubles("2024-05-01", ["P1", "P2", "P3", "P4"], "P1,P2")];
        let profile = compute_player_profile("P1", &log);

        assert_eq!(profile.frequency_days, 1);
        assert_eq!(profile.partner_names(), vec!["P2"]);
        let partner = profile.partner("P2").unwrap();
        assert_eq!((partner.wins, partner.total), (1, 1));
        assert_eq!(profile.best_partner.as_deref(), Some("P2"));
    }

    #[test]
    fn test_team_b_partner_and_losses() {
        let log = vec![doubles("2024-05-01", ["P1", "P2", "P3", "P4"], "P1,P2")];
        let profile = compute_player_profile("P4", &log);

        let partner = profile.partner("P3").unwrap();
        assert_eq!((partner.wins, partner.total), (0, 1));
        assert_eq!(profile.best_partner.as_deref(), Some("P3"));
    }

    #[test]
    fn test_same_day_counts_once() {
        let log = vec![
            singles("2024-05-01", "Ana", "Bruno", "Ana"),
            singles("2024-05-01", "Ana", "Carla", "Carla"),
            singles("2024-05-03", "Bruno", "Ana", "Ana"),
            singles("2024-05-04", "Bruno", "Carla", "Carla"),
        ];
        let profile = compute_player_profile("Ana", &log);
        assert_eq!(profile.frequency_days, 2);
    }

    #[test]
    fn test_singles_only_player_has_no_partners() {
        let log = vec![singles("2024-05-01", "Ana", "Bruno", "Ana")];
        let profile = compute_player_profile("Ana", &log);

        assert_eq!(profile.frequency_days, 1);
        assert!(profile.partners.is_empty());
        assert_eq!(profile.best_partner, None);
    }

    #[test]
    fn test_unknown_player_is_empty() {
        let log = vec![singles("2024-05-01", "Ana", "Bruno", "Ana")];
        let profile = compute_player_profile("Zeca", &log);
        assert_eq!(profile.frequency_days, 0);
        assert_eq!(profile.best_partner, None);
    }

    #[test]
    fn test_best_partner_by_ratio() {
        let log = vec![
            doubles("2024-05-01", ["Ana", "Bruno", "Carla", "Davi"], "Carla,Davi"),
            doubles("2024-05-02", ["Ana", "Carla", "Bruno", "Davi"], "Ana,Carla"),
            doubles("2024-05-03", ["Ana", "Bruno", "Carla", "Davi"], "Ana,Bruno"),
            doubles("2024-05-04", ["Davi", "Ana", "Bruno", "Carla"], "Bruno,Carla"),
        ];
        let profile = compute_player_profile("Ana", &log);

        // Bruno 1/2, Carla 1/1, Davi 0/1
        assert_eq!(profile.partner_names(), vec!["Bruno", "Carla", "Davi"]);
        assert_eq!(profile.best_partner.as_deref(), Some("Carla"));
        assert_eq!(profile.frequency_days, 4);
    }

    #[test]
    fn test_equal_ratio_keeps_first_partner() {
        let log = vec![
            doubles("2024-05-01", ["Ana", "Davi", "Bruno", "Carla"], "Ana,Davi"),
            doubles("2024-05-02", ["Ana", "Bruno", "Carla", "Davi"], "Ana,Bruno"),
        ];
        let profile = compute_player_profile("Ana", &log);
        assert_eq!(profile.best_partner.as_deref(), Some("Davi"));
    }

    #[test]
    fn test_zero_total_partner_never_best() {
        let partners = vec![
            PartnerRecord {
                name: "Ghost".to_string(),
                wins: 0,
                total: 0,
            },
            PartnerRecord {
                name: "Bruno".to_string(),
                wins: 0,
                total: 3,
            },
        ];
        assert_eq!(best_partner(&partners).map(|p| p.name.as_str()), Some("Bruno"));
        assert!(best_partner(&partners[..1]).is_none());
    }

    #[test]
    fn test_blank_teammate_still_counts_day() {
        let mut partial = doubles("2024-05-01", ["Ana", "Bruno", "Carla", "Davi"], "Ana,Bruno");
        partial.player4 = None;
        let log = vec![
            partial,
            doubles("2024-05-02", ["Carla", "Ana", "Bruno", "Davi"], "Carla,Ana"),
        ];
        let profile = compute_player_profile("Carla", &log);

        assert_eq!(profile.frequency_days, 2);
        assert_eq!(profile.partner_names(), vec!["Ana"]);
        assert!(profile.skipped.is_empty());
    }

    #[test]
    fn test_unreadable_date_still_profiled() {
        let log = vec![
            doubles("not a date", ["Ana", "Bruno", "Carla", "Davi"], "Ana,Bruno"),
            singles("2024-05-02", "Ana", "Bruno", "Bruno"),
            singles("2024-05-02 18:30:00", "Ana", "Carla", "Ana"),
        ];
        let profile = compute_player_profile("Ana", &log);

        assert_eq!(profile.frequency_days, 2);
        assert_eq!(profile.partner("Bruno").map(|p| p.wins), Some(1));
        assert!(profile.skipped.is_empty());
    }

    #[test]
    fn test_row_without_type_reported() {
        let mut broken = singles("2024-05-01", "Ana", "Bruno", "Ana");
        broken.match_type = String::new();
        let log = vec![broken, singles("2024-05-02", "Ana", "Bruno", "Bruno")];
        let profile = compute_player_profile("Ana", &log);

        assert_eq!(profile.frequency_days, 1);
        assert_eq!(profile.skipped.len(), 1);
        assert_eq!(profile.skipped[0].index, 0);
    }
}
