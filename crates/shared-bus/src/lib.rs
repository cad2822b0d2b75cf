//! # Shared Bus - Registry Notifications
//!
//! Carries the durable audit trail of the registry: one event per successful
//! mutating call, never one on failure.
//!
//! ```text
//! ┌──────────────────┐                    ┌──────────────────┐
//! │ SubmissionLedger │    publish()       │ External observer│
//! │                  │ ──────┐            │  (indexer, CLI)  │
//! └──────────────────┘       │            └──────────────────┘
//!                            ▼                    ↑
//!                      ┌──────────────┐           │
//!                      │  Event Bus   │ ──────────┘
//!                      └──────────────┘  subscribe()
//! ```
//!
//! Events are published only after the ledger commit that produced them, so a
//! subscriber never observes a notification for state that was rolled back.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, RegistryEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, EventSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging subscribers drop events.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
