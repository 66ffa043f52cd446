//! Core of the window toggler: global input capture and the window
//! visibility state machine.
//!
//! Everything outside `platform` is free of Win32 FFI so tests can run as
//! normal integration tests on any host. The OS is reached only through the
//! [`WindowSystem`], [`HotkeyBackend`] and [`PointerBackend`] traits.

pub mod app;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod model;
pub mod platform;
pub mod storage;
pub mod toggle;

// Re-export the types most callers need
pub use app::Controller;
pub use error::{AppError, BindingParseError, ConfigError, HookError, HotkeyError, ProcessPathError};
pub use events::{EventBus, EventPublisher, Notification, Subscribers, SubscriptionId};
pub use input::{HotkeyBackend, HotkeyRegistry, PointerBackend, PointerDispatch, PointerEventHook};
pub use model::{
    HotkeyBinding, HotkeyKind, Key, ListPolicy, Modifiers, Point, Rect, TrackedWindow,
    TriggerMode, WindowChange, WindowHandle,
};
pub use storage::Settings;
pub use toggle::{TargetGroup, VisibilityController, WindowDirectory, WindowSystem};
