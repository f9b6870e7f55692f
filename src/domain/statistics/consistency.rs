use std::cmp::Ordering;

use super::entity::Inconsistency;
use crate::domain::matches::{MatchRecord, ScoredMatch, Side};

/// Lists matches whose stored winners are not the side that took more sets.
///
/// Scoring always trusts the stored winners; this is a report for the
/// organizer only. Rows without a decisive set count are not judged.
pub fn check_consistency(matches: &[MatchRecord]) -> Vec<Inconsistency> {
    matches
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let m = ScoredMatch::try_from(record).ok()?;
            let winner_by_sets = winner_by_sets(&m)?;
            let recorded_winner = m.winning_side();
            (recorded_winner != Some(winner_by_sets)).then(|| Inconsistency {
                index,
                label: record.label(),
                recorded_winner,
                winner_by_sets,
            })
        })
        .collect()
}

fn winner_by_sets(m: &ScoredMatch) -> Option<Side> {
    let (mut sets_a, mut sets_b) = (0u32, 0u32);
    for score in m.parsed_sets() {
        match score.winner() {
            Some(Side::A) => sets_a += 1,
            Some(Side::B) => sets_b += 1,
            None => {}
        }
    }
    match sets_a.cmp(&sets_b) {
        Ordering::Greater => Some(Side::A),
        Ordering::Less => Some(Side::B),
        Ordering::Equal => None,
    }
}
