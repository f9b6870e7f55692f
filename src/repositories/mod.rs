// src/repositories/mod.rs
//
// Record Store layer
//
// CRITICAL RULES:
// - Stores are DUMB data mappers
// - NO business logic
// - NO invariant enforcement (referential integrity included)
// - NO event emission
// - Whole-table reads and whole-table overwrites only

pub mod csv_record_store;
pub mod record_store;
pub mod sqlite;

pub use csv_record_store::{CsvRecordStore, MATCHES_FILE, PLAYERS_FILE};
pub use record_store::RecordStore;
pub use sqlite::{SqliteRecordStore, DATABASE_FILE};

#[cfg(test)]
pub use record_store::MockRecordStore;
