// src/services/match_service.rs

use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use crate::domain::{
    validate_match, DomainError, Match, MatchRecord, MatchType, SetScore, Side,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, MatchDeleted, MatchRecorded, MatchUpdated};
use crate::repositories::RecordStore;
use crate::services::LedgerSnapshot;

/// Entry-form input for one match
#[derive(Debug, Clone)]
pub struct RecordMatchRequest {
    pub date: NaiveDate,
    pub match_type: MatchType,

    /// Slot order: singles `[a, b]`, doubles `[a1, a2, b1, b2]`
    pub players: Vec<String>,

    pub sets: Vec<SetScore>,
    pub winner: Side,
}

#[derive(Debug, Clone)]
pub struct UpdateMatchRequest {
    /// 1-based place in the match history
    pub position: usize,
    pub replacement: RecordMatchRequest,
}

pub struct MatchService {
    store: Arc<dyn RecordStore>,
    event_bus: Arc<EventBus>,
}

impl MatchService {
    pub fn new(store: Arc<dyn RecordStore>, event_bus: Arc<EventBus>) -> Self {
        Self { store, event_bus }
    }

    /// Appends a match to the log and returns its position
    pub fn record_match(
        &self,
        snapshot: &mut LedgerSnapshot,
        request: RecordMatchRequest,
    ) -> AppResult<usize> {
        let record = Self::build_record(snapshot, request)?;
        let label = record.label();

        let mut matches = snapshot.matches.clone();
        matches.push(record);
        let position = matches.len();
        let players = snapshot.players.clone();
        snapshot.replace(self.store.as_ref(), players, matches)?;

        info!("Recorded match #{}: {}", position, label);
        self.event_bus.emit(MatchRecorded::new(position, label));
        Ok(position)
    }

    /// Overwrites the match at `position`, keeping its place in the log
    pub fn update_match(
        &self,
        snapshot: &mut LedgerSnapshot,
        request: UpdateMatchRequest,
    ) -> AppResult<()> {
        let index = Self::index_of(snapshot, request.position)?;
        let record = Self::build_record(snapshot, request.replacement)?;
        let label = record.label();

        let mut matches = snapshot.matches.clone();
        matches[index] = record;
        let players = snapshot.players.clone();
        snapshot.replace(self.store.as_ref(), players, matches)?;

        info!("Updated match #{}: {}", request.position, label);
        self.event_bus
            .emit(MatchUpdated::new(request.position, label));
        Ok(())
    }

    /// Removes the match at `position`; later matches move up by one
    pub fn delete_match(&self, snapshot: &mut LedgerSnapshot, position: usize) -> AppResult<()> {
        let index = Self::index_of(snapshot, position)?;

        let mut matches = snapshot.matches.clone();
        let removed = matches.remove(index);
        let label = removed.label();
        let players = snapshot.players.clone();
        snapshot.replace(self.store.as_ref(), players, matches)?;

        info!("Deleted match #{}: {}", position, label);
        self.event_bus.emit(MatchDeleted::new(position, label));
        Ok(())
    }

    fn build_record(
        snapshot: &LedgerSnapshot,
        request: RecordMatchRequest,
    ) -> AppResult<MatchRecord> {
        let m = Match::new(
            request.date,
            request.match_type,
            request.players,
            request.sets,
            request.winner,
        )?;
        validate_match(&m, &snapshot.players)?;
        Ok(MatchRecord::from(&m))
    }

    fn index_of(snapshot: &LedgerSnapshot, position: usize) -> AppResult<usize> {
        if position == 0 || position > snapshot.matches.len() {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "match #{}",
                position
            ))));
        }
        Ok(position - 1)
    }
}
