// src/domain/statistics/aggregation.rs
//
// Points, match wins and games won over the full match log.

use log::debug;

use super::entity::{LeaderboardRow, SkippedRecord, Standings};
use crate::domain::matches::{is_unset_name, MatchRecord, ScoredMatch};

/// Points for each member of the winning side
pub const WIN_POINTS: u32 = 3;

/// Points for each member of the losing side; showing up counts
pub const LOSS_POINTS: u32 = 1;

/// Tallies every interpretable row of `matches`.
///
/// Winners come from the stored `Winners` column, losers are the remaining
/// filled slots. The date is never read. Unparseable set scores add nothing;
/// only rows without a known type or without winners land in
/// `Standings::skipped`.
pub fn compute_leaderboard(matches: &[MatchRecord]) -> Standings {
    let mut standings = Standings::default();

    for (index, record) in matches.iter().enumerate() {
        match ScoredMatch::try_from(record) {
            Ok(m) => tally_match(&mut standings, &m),
            Err(e) => {
                debug!("Skipping match #{} in leaderboard: {}", index + 1, e);
                standings.skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    standings
}

fn tally_match(standings: &mut Standings, m: &ScoredMatch) {
    for winner in &m.winners {
        award(standings, winner, WIN_POINTS);
        *standings.match_wins.entry(winner.clone()).or_insert(0) += 1;
    }
    for loser in m.participants().filter(|p| !m.won_by(p)) {
        award(standings, loser, LOSS_POINTS);
    }

    // Game counts come straight from stored text; saturate rather than overflow
    for score in m.parsed_sets() {
        for player in &m.team_a {
            let total = standings.games_won.entry(player.clone()).or_insert(0);
            *total = total.saturating_add(score.games_a);
        }
        for player in &m.team_b {
            let total = standings.games_won.entry(player.clone()).or_insert(0);
            *total = total.saturating_add(score.games_b);
        }
    }
}

fn award(standings: &mut Standings, name: &str, points: u32) {
    match standings.points.get_mut(name) {
        Some(total) => *total += points,
        None => {
            standings.order.push(name.to_string());
            standings.points.insert(name.to_string(), points);
        }
    }
}

/// Orders players by points, then match wins, then games won (all descending).
///
/// Ranks are positions: two players with identical numbers still get
/// consecutive ranks, in the order they first appeared in the log.
pub fn rank_leaderboard(standings: &Standings) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = standings
        .order
        .iter()
        .filter(|name| !is_unset_name(name))
        .map(|name| LeaderboardRow {
            rank: 0,
            name: name.clone(),
            points: standings.points_of(name),
            match_wins: standings.match_wins_of(name),
            games_won: standings.games_won_of(name),
        })
        .collect();

    // sort_by is stable, so full ties keep log order
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.match_wins.cmp(&a.match_wins))
            .then_with(|| b.games_won.cmp(&a.games_won))
    });

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position + 1;
    }

    rows
}
