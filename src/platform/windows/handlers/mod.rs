//! Presentation-side handlers for core notifications.

pub mod dispatcher;

pub use dispatcher::dispatch_notifications;
