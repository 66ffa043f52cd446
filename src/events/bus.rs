//! Notification bus from the core to the presentation layer.
//!
//! The bus provides a simple publish/drain mechanism where:
//! - Core code publishes via `EventPublisher::publish()`
//! - The UI loop polls via `EventBus::drain()` and updates its views
//!
//! Built on std mpsc so publishers are `Send` and cheap to clone.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::Notification;

/// Queue of [`Notification`]s for the presentation layer.
///
/// # Example
///
/// ```
/// use wintoggle::events::{EventBus, Notification};
/// use wintoggle::model::HotkeyKind;
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(Notification::HotkeyInUse(HotkeyKind::Targets));
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<Notification>,
    receiver: Receiver<Notification>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Each producer holds its own clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next notification without blocking.
    pub fn try_recv(&self) -> Option<Notification> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus keeps its own sender, so Disconnected cannot happen while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe notification publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<Notification>,
}

impl EventPublisher {
    /// Publish a notification.
    ///
    /// If the bus has been dropped (app shutting down), the send silently fails.
    pub fn publish(&self, event: Notification) {
        let _ = self.sender.send(event);
    }
}
