// src/events/types.rs
//
// Every event is an immutable fact about a mutation that was already saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// PLAYER EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl PlayerAdded {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl_domain_event!(PlayerAdded);

/// `matches_removed` is zero when the player's matches were kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
    pub matches_removed: usize,
}

impl PlayerRemoved {
    pub fn new(name: String, matches_removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
            matches_removed,
        }
    }
}

impl_domain_event!(PlayerRemoved);

// ============================================================================
// MATCH EVENTS
// ============================================================================

/// `position` is the 1-based place in the match history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecorded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub label: String,
}

impl MatchRecorded {
    pub fn new(position: usize, label: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            label,
        }
    }
}

impl_domain_event!(MatchRecorded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub label: String,
}

impl MatchUpdated {
    pub fn new(position: usize, label: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            label,
        }
    }
}

impl_domain_event!(MatchUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub label: String,
}

impl MatchDeleted {
    pub fn new(position: usize, label: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            label,
        }
    }
}

impl_domain_event!(MatchDeleted);
