// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::repositories::RecordStore;
use crate::services::{LedgerSnapshot, MatchService, PlayerService, StatisticsService};

/// Shared handles for every command.
/// Holds no ledger data; each command loads a fresh snapshot.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub event_bus: Arc<EventBus>,
    pub player_service: Arc<PlayerService>,
    pub match_service: Arc<MatchService>,
    pub statistics_service: Arc<StatisticsService>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        Self {
            player_service: Arc::new(PlayerService::new(
                Arc::clone(&store),
                Arc::clone(&event_bus),
            )),
            match_service: Arc::new(MatchService::new(
                Arc::clone(&store),
                Arc::clone(&event_bus),
            )),
            statistics_service: Arc::new(StatisticsService::new()),
            store,
            event_bus,
        }
    }

    pub fn load_snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::load(self.store.as_ref())
    }
}
