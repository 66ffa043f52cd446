//! Event plumbing.
//!
//! Two mechanisms, for two directions:
//!
//! - [`Subscribers`]: synchronous callback lists. Input sources (hotkeys,
//!   the mouse hook) and [`TrackedWindow`](crate::model::TrackedWindow)
//!   fire these on the message thread.
//! - [`EventBus`]: an mpsc queue of [`Notification`]s the core publishes
//!   for the presentation layer to drain.
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐
//! │  Hotkeys    │   │ Mouse hook  │
//! └──────┬──────┘   └──────┬──────┘
//!        │ emit()          │ emit()
//!        ▼                 ▼
//! ┌─────────────────────────────────┐
//! │  Controller / TargetGroup       │
//! └───────────────┬─────────────────┘
//!                 │ publish()
//!                 ▼
//! ┌─────────────────────────────────┐
//! │  EventBus  ──drain()──▶  UI     │
//! └─────────────────────────────────┘
//! ```

pub mod bus;
pub mod subscribers;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use subscribers::{Subscribers, SubscriptionId};
pub use types::Notification;
