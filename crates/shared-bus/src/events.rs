//! # Registry Events
//!
//! Notifications emitted on successful mutation of the registry.

use serde::{Deserialize, Serialize};
use shared_types::encoding::hex_fixed;
use shared_types::entities::{Address, Cid, DaId, DataHash, SubmissionRecord};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum RegistryEvent {
    /// A new (submitter, dataHash, da) -> cid record was committed.
    SubmissionRecorded {
        #[serde(with = "hex_fixed")]
        submitter: Address,
        #[serde(with = "hex_fixed")]
        data_hash: DataHash,
        #[serde(with = "hex_fixed")]
        da: DaId,
        cid: Cid,
    },

    /// `new_submitter` appended `old_submitter` to its extension chain.
    ExtensionDeclared {
        #[serde(with = "hex_fixed")]
        new_submitter: Address,
        #[serde(with = "hex_fixed")]
        old_submitter: Address,
    },
}

impl RegistryEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::SubmissionRecorded { .. } => EventTopic::Submissions,
            Self::ExtensionDeclared { .. } => EventTopic::Extensions,
        }
    }

    /// The address whose authorized action produced this event.
    #[must_use]
    pub fn actor(&self) -> Address {
        match self {
            Self::SubmissionRecorded { submitter, .. } => *submitter,
            Self::ExtensionDeclared { new_submitter, .. } => *new_submitter,
        }
    }
}

impl From<SubmissionRecord> for RegistryEvent {
    fn from(record: SubmissionRecord) -> Self {
        Self::SubmissionRecorded {
            submitter: record.submitter,
            data_hash: record.data_hash,
            da: record.da,
            cid: record.cid,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// `SubmissionRecorded` events.
    Submissions,
    /// `ExtensionDeclared` events.
    Extensions,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Actors to include. Empty means all actors.
    pub actors: Vec<Address>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            actors: Vec::new(),
        }
    }

    /// Create a filter for events caused by specific addresses.
    #[must_use]
    pub fn from_actors(actors: Vec<Address>) -> Self {
        Self {
            topics: Vec::new(),
            actors,
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &RegistryEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let actor_match = self.actors.is_empty() || self.actors.contains(&event.actor());

        topic_match && actor_match
    }
}
