// src/events/mod.rs
//
// Internal Event System - Public API
//
// Services emit one event after each persisted mutation.
// Adapters subscribe to show confirmations.

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};

pub use types::{
    DomainEvent,
    // Matches
    MatchDeleted,
    MatchRecorded,
    MatchUpdated,
    // Players
    PlayerAdded,
    PlayerRemoved,
};
