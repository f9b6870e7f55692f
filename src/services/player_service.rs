// src/services/player_service.rs

use std::sync::Arc;

use log::info;

use crate::domain::{validate_new_player, DomainError, Player};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, PlayerAdded, PlayerRemoved};
use crate::repositories::RecordStore;
use crate::services::LedgerSnapshot;

#[derive(Debug, Clone)]
pub struct RemovePlayerRequest {
    pub name: String,

    /// Leave the player's matches in the log instead of deleting them
    pub keep_matches: bool,
}

pub struct PlayerService {
    store: Arc<dyn RecordStore>,
    event_bus: Arc<EventBus>,
}

impl PlayerService {
    pub fn new(store: Arc<dyn RecordStore>, event_bus: Arc<EventBus>) -> Self {
        Self { store, event_bus }
    }

    pub fn add_player(&self, snapshot: &mut LedgerSnapshot, name: &str) -> AppResult<Player> {
        let player = Player::new(name);
        validate_new_player(&player, &snapshot.players).map_err(AppError::Domain)?;

        let mut players = snapshot.players.clone();
        players.push(player.clone());
        let matches = snapshot.matches.clone();
        snapshot.replace(self.store.as_ref(), players, matches)?;

        info!("Added player {}", player.name);
        self.event_bus.emit(PlayerAdded::new(player.name.clone()));
        Ok(player)
    }

    /// Removes a player and, unless asked to keep them, every match they
    /// played in. Returns how many matches were deleted.
    pub fn remove_player(
        &self,
        snapshot: &mut LedgerSnapshot,
        request: RemovePlayerRequest,
    ) -> AppResult<usize> {
        let name = request.name.trim();
        if !snapshot.has_player(name) {
            return Err(AppError::Domain(DomainError::UnknownPlayer(name.to_string())));
        }

        let players: Vec<Player> = snapshot
            .players
            .iter()
            .filter(|p| p.name != name)
            .cloned()
            .collect();
        let matches: Vec<_> = if request.keep_matches {
            snapshot.matches.clone()
        } else {
            snapshot
                .matches
                .iter()
                .filter(|m| !m.involves(name))
                .cloned()
                .collect()
        };
        let removed = snapshot.matches.len() - matches.len();
        snapshot.replace(self.store.as_ref(), players, matches)?;

        info!("Removed player {} and {} of their matches", name, removed);
        self.event_bus
            .emit(PlayerRemoved::new(name.to_string(), removed));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MatchRecord;
    use crate::repositories::MockRecordStore;

    fn singles(p1: &str, p2: &str) -> MatchRecord {
        MatchRecord {
            date: "2024-05-01".to_string(),
            match_type: "Singles".to_string(),
            player1: Some(p1.to_string()),
            player2: Some(p2.to_string()),
            set1: Some("6-4".to_string()),
            winners: Some(p1.to_string()),
            ..Default::default()
        }
    }

    fn saving_store() -> MockRecordStore {
        let mut store = MockRecordStore::new();
        store.expect_save_all().returning(|_, _| Ok(()));
        store
    }

    fn snapshot() -> LedgerSnapshot {
        LedgerSnapshot {
            players: vec![Player::new("Ana"), Player::new("Bruno"), Player::new("Carla")],
            matches: vec![
                singles("Ana", "Bruno"),
                singles("Bruno", "Carla"),
                singles("Carla", "Ana"),
            ],
            load_errors: Vec::new(),
        }
    }

    #[test]
    fn test_add_player_persists_and_emits() {
        let bus = Arc::new(EventBus::new());
        let service = PlayerService::new(Arc::new(saving_store()), Arc::clone(&bus));
        let mut snapshot = LedgerSnapshot::default();

        let player = service.add_player(&mut snapshot, "  Davi ").unwrap();

        assert_eq!(player.name, "Davi");
        assert_eq!(snapshot.players, vec![Player::new("Davi")]);
        assert_eq!(bus.get_event_log()[0].event_type, "PlayerAdded");
    }

    #[test]
    fn test_duplicate_player_rejected_without_saving() {
        let mut store = MockRecordStore::new();
        store.expect_save_all().never();
        let service = PlayerService::new(Arc::new(store), Arc::new(EventBus::new()));
        let mut snapshot = snapshot();

        let result = service.add_player(&mut snapshot, "Ana");

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::DuplicatePlayer(_)))
        ));
        assert_eq!(snapshot.players.len(), 3);
    }

    #[test]
    fn test_empty_name_rejected() {
        let service = PlayerService::new(Arc::new(saving_store()), Arc::new(EventBus::new()));
        assert!(service
            .add_player(&mut LedgerSnapshot::default(), "   ")
            .is_err());
    }

    #[test]
    fn test_remove_cascades_to_matches() {
        let service = PlayerService::new(Arc::new(saving_store()), Arc::new(EventBus::new()));
        let mut snapshot = snapshot();

        let removed = service
            .remove_player(
                &mut snapshot,
                RemovePlayerRequest {
                    name: "Ana".to_string(),
                    keep_matches: false,
                },
            )
            .unwrap();

        assert_eq!(removed, 2);
        assert!(!snapshot.has_player("Ana"));
        assert_eq!(snapshot.matches, vec![singles("Bruno", "Carla")]);
    }

    #[test]
    fn test_remove_can_keep_matches() {
        let service = PlayerService::new(Arc::new(saving_store()), Arc::new(EventBus::new()));
        let mut snapshot = snapshot();

        let removed = service
            .remove_player(
                &mut snapshot,
                RemovePlayerRequest {
                    name: "Ana".to_string(),
                    keep_matches: true,
                },
            )
            .unwrap();

        assert_eq!(removed, 0);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.matches.len(), 3);
    }

    #[test]
    fn test_remove_unknown_player() {
        let service = PlayerService::new(Arc::new(saving_store()), Arc::new(EventBus::new()));
        let result = service.remove_player(
            &mut snapshot(),
            RemovePlayerRequest {
                name: "Zeca".to_string(),
                keep_matches: false,
            },
        );
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UnknownPlayer(_)))
        ));
    }
}
