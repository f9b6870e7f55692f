use super::entity::Player;
use crate::domain::matches::{is_unset_name, WINNERS_SEPARATOR};
use crate::domain::{DomainError, DomainResult};

/// Validates all Player invariants
pub fn validate_player(player: &Player) -> DomainResult<()> {
    validate_name(&player.name)?;
    Ok(())
}

/// Validates a player about to join `roster`.
/// Names are unique across the roster.
pub fn validate_new_player(player: &Player, roster: &[Player]) -> DomainResult<()> {
    validate_player(player)?;
    if roster.iter().any(|existing| existing.name == player.name) {
        return Err(DomainError::DuplicatePlayer(player.name.clone()));
    }
    Ok(())
}

/// Name cannot be empty, cannot collide with the unset-slot sentinel and
/// cannot contain the winners separator.
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Player name cannot be empty".to_string(),
        ));
    }
    if is_unset_name(name) {
        return Err(DomainError::InvariantViolation(format!(
            "'{}' is reserved for empty player slots",
            name
        )));
    }
    if name.contains(WINNERS_SEPARATOR) {
        return Err(DomainError::InvariantViolation(format!(
            "Player name '{}' cannot contain '{}'",
            name, WINNERS_SEPARATOR
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Player domain:
///
/// 1. Name is the identity and is never empty
/// 2. Names are unique within the roster
/// 3. Removing a player does not rewrite history on its own;
///    cascading to matches is a service decision

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_player() {
        assert!(validate_player(&Player::new("Ana")).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(validate_player(&Player::new("   ")).is_err());
    }

    #[test]
    fn test_sentinel_name_fails() {
        assert!(validate_player(&Player::new("None")).is_err());
    }

    #[test]
    fn test_separator_in_name_fails() {
        assert!(validate_player(&Player::new("Silva, Ana")).is_err());
    }

    #[test]
    fn test_duplicate_fails() {
        let roster = vec![Player::new("Ana"), Player::new("Bruno")];
        let result = validate_new_player(&Player::new("Bruno"), &roster);
        assert!(matches!(result, Err(DomainError::DuplicatePlayer(name)) if name == "Bruno"));
    }

    #[test]
    fn test_new_name_passes() {
        let roster = vec![Player::new("Ana")];
        assert!(validate_new_player(&Player::new("Carla"), &roster).is_ok());
    }
}
