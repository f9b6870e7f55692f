use std::collections::HashSet;

use super::entity::{is_unset_name, Match, SetScore, MAX_SETS};
use crate::domain::player::Player;
use crate::domain::{DomainError, DomainResult};

/// Validates a match before it enters the log.
/// Stored rows are never re-validated; statistics read them tolerantly.
pub fn validate_match(m: &Match, roster: &[Player]) -> DomainResult<()> {
    validate_teams(m)?;
    validate_participants(m, roster)?;
    validate_sets(m)?;
    validate_winners(m)?;
    Ok(())
}

fn validate_teams(m: &Match) -> DomainResult<()> {
    let size = m.match_type.team_size();
    if m.team_a.len() != size || m.team_b.len() != size {
        return Err(DomainError::InvariantViolation(format!(
            "{} teams have {} player(s) each",
            m.match_type, size
        )));
    }
    Ok(())
}

/// Every participant is a registered player and appears only once
fn validate_participants(m: &Match, roster: &[Player]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for name in m.participants() {
        if is_unset_name(name) {
            return Err(DomainError::InvariantViolation(
                "Every player slot must be filled".to_string(),
            ));
        }
        if !roster.iter().any(|p| p.name == name) {
            return Err(DomainError::UnknownPlayer(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(DomainError::InvariantViolation(format!(
                "'{}' cannot play twice in the same match",
                name
            )));
        }
    }
    Ok(())
}

fn validate_sets(m: &Match) -> DomainResult<()> {
    if m.sets.len() > MAX_SETS {
        return Err(DomainError::InvariantViolation(format!(
            "At most {} sets can be recorded",
            MAX_SETS
        )));
    }
    for raw in &m.sets {
        raw.parse::<SetScore>()?;
    }
    Ok(())
}

/// Winners are one whole team
fn validate_winners(m: &Match) -> DomainResult<()> {
    if m.winners.is_empty() {
        return Err(DomainError::InvariantViolation(
            "A match needs a winner".to_string(),
        ));
    }
    if let Some(stranger) = m.winners.iter().find(|w| m.side_of(w).is_none()) {
        return Err(DomainError::InvariantViolation(format!(
            "Winner '{}' did not play in this match",
            stranger
        )));
    }
    if m.winning_side().is_none() {
        return Err(DomainError::InvariantViolation(
            "Winners must be exactly one team".to_string(),
        ));
    }
    Ok(())
}

/// Critical Match Invariants:
///
/// 1. Singles fill Player1/Player2, doubles fill all four slots
/// 2. Participants are registered when the match is entered
/// 3. Winners are a non-empty subset of the participants, one whole side
/// 4. Up to three sets, each "<int>-<int>"
/// 5. Winners are NOT cross-checked against set scores (see check_consistency)
