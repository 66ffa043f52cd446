//! Windows as seen by the toggler (pure Rust, no FFI).

use std::fmt;

use crate::events::{Subscribers, SubscriptionId};

/// Opaque identifier of a top-level OS window.
///
/// Not owned by this crate: the window may be destroyed at any time, after
/// which every call against the handle fails or is ignored by the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Screen position in virtual-screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Screen rectangle as (left, top, right, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Left and top edges are inside, right and bottom edges are outside.
    ///
    /// This differs from WPF's `Rect.Contains`, which counts every edge as
    /// inside. With half-open edges, two windows that share an edge never both
    /// claim the pointer, and the default all-zero rect contains nothing.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// A change to a [`TrackedWindow`] that list views care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowChange {
    Title(String),
    Visibility(bool),
}

/// A top-level window known to the toggler.
///
/// `cached_visible` mirrors the last show/hide issued through this crate,
/// not necessarily the live OS state. Observers registered with
/// [`TrackedWindow::subscribe`] are told about title and visibility changes;
/// they are not carried over by `clone()`.
pub struct TrackedWindow {
    pub handle: WindowHandle,
    title: String,
    pub process_id: u32,
    pub executable_path: String,
    cached_visible: bool,
    pub last_known_rect: Rect,
    observers: Subscribers<WindowChange>,
}

impl TrackedWindow {
    pub fn new(
        handle: WindowHandle,
        title: impl Into<String>,
        process_id: u32,
        executable_path: impl Into<String>,
        visible: bool,
    ) -> Self {
        Self {
            handle,
            title: title.into(),
            process_id,
            executable_path: executable_path.into(),
            cached_visible: visible,
            last_known_rect: Rect::default(),
            observers: Subscribers::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.cached_visible
    }

    /// Check mark or cross, as shown in list views.
    pub fn visibility_text(&self) -> &'static str {
        if self.cached_visible {
            "\u{2714}"
        } else {
            "\u{274C}"
        }
    }

    /// Update the title, notifying observers. Returns true if it changed.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.title == title {
            return false;
        }
        self.title = title;
        self.observers.emit(&WindowChange::Title(self.title.clone()));
        true
    }

    /// Update the cached visibility, notifying observers. Returns true if it changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.cached_visible == visible {
            return false;
        }
        self.cached_visible = visible;
        self.observers.emit(&WindowChange::Visibility(visible));
        true
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&WindowChange) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Clone for TrackedWindow {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            title: self.title.clone(),
            process_id: self.process_id,
            executable_path: self.executable_path.clone(),
            cached_visible: self.cached_visible,
            last_known_rect: self.last_known_rect,
            observers: Subscribers::new(),
        }
    }
}

impl fmt::Debug for TrackedWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedWindow")
            .field("handle", &self.handle)
            .field("title", &self.title)
            .field("process_id", &self.process_id)
            .field("executable_path", &self.executable_path)
            .field("cached_visible", &self.cached_visible)
            .field("last_known_rect", &self.last_known_rect)
            .field("observers", &self.observers.len())
            .finish()
    }
}
