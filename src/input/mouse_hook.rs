//! Low-level mouse hook and gesture derivation.
//!
//! The OS delivers a raw button/move stream; [`PointerDispatch`] turns it
//! into three signals:
//! - pointer moved (x, y), on every move
//! - middle button pressed
//! - left and right held down together (edge-triggered: after firing, both
//!   flags reset, so the next chord needs a fresh press of both buttons)
//!
//! Constraint: dispatch runs inside the OS input path. Subscribers must be
//! quick and must not feed events back into the same dispatch synchronously.

use std::rc::Rc;
use std::sync::{Mutex, PoisonError};

use tracing::{info, trace, warn};

use crate::error::HookError;
use crate::events::{Subscribers, SubscriptionId};
use crate::model::Point;

/// One raw notification from the low-level hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawPointerEvent {
    Move(Point),
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    MiddleDown,
    MiddleUp,
    /// Wheel, X buttons and anything else: forwarded, otherwise ignored.
    Other,
}

/// Left/right button state used for chord detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerChordState {
    pub left_down: bool,
    pub right_down: bool,
}

/// Signals produced by one raw event, fired after the state lock is released.
#[derive(Debug, Default)]
struct Pending {
    moved: Option<Point>,
    middle: bool,
    chord: bool,
}

/// The pure half of the hook: state machine plus subscriber lists.
pub struct PointerDispatch {
    chord: Mutex<PointerChordState>,
    moved: Subscribers<Point>,
    middle_down: Subscribers<()>,
    simultaneous: Subscribers<()>,
}

impl PointerDispatch {
    pub fn new() -> Self {
        Self {
            chord: Mutex::new(PointerChordState::default()),
            moved: Subscribers::new(),
            middle_down: Subscribers::new(),
            simultaneous: Subscribers::new(),
        }
    }

    /// Feed one raw event through the state machine and fire any signals.
    pub fn process(&self, event: RawPointerEvent) {
        let pending = {
            let mut state = self.chord.lock().unwrap_or_else(PoisonError::into_inner);
            let mut pending = Pending::default();
            match event {
                RawPointerEvent::Move(pt) => pending.moved = Some(pt),
                RawPointerEvent::MiddleDown => pending.middle = true,
                RawPointerEvent::LeftDown => state.left_down = true,
                RawPointerEvent::LeftUp => state.left_down = false,
                RawPointerEvent::RightDown => state.right_down = true,
                RawPointerEvent::RightUp => state.right_down = false,
                RawPointerEvent::MiddleUp | RawPointerEvent::Other => {}
            }
            if state.left_down && state.right_down {
                pending.chord = true;
                *state = PointerChordState::default();
            }
            pending
        };

        if let Some(pt) = pending.moved {
            self.moved.emit(&pt);
        }
        if pending.middle {
            trace!("Middle button down");
            self.middle_down.emit(&());
        }
        if pending.chord {
            trace!("Left+right chord");
            self.simultaneous.emit(&());
        }
    }

    pub fn chord_state(&self) -> PointerChordState {
        *self.chord.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PointerDispatch {
    fn default() -> Self {
        Self::new()
    }
}

/// OS side of the hook.
pub trait PointerBackend {
    /// Install the low-level listener, delivering every raw event to
    /// `dispatch` and then to the next hook in the chain.
    fn install(&mut self, dispatch: Rc<PointerDispatch>) -> Result<(), HookError>;

    /// Remove the listener. Returns false if the OS call failed.
    fn uninstall(&mut self) -> bool;
}

/// Owner of the process's low-level mouse hook.
///
/// Construct once at startup and hand references (`Rc`) to consumers.
pub struct PointerEventHook<B: PointerBackend> {
    backend: B,
    dispatch: Rc<PointerDispatch>,
    installed: bool,
}

impl<B: PointerBackend> PointerEventHook<B> {
    /// Install the hook. Failure is fatal for every mouse-driven trigger.
    pub fn install(mut backend: B) -> Result<Self, HookError> {
        let dispatch = Rc::new(PointerDispatch::new());
        backend.install(Rc::clone(&dispatch))?;
        info!("Low-level mouse hook installed");
        Ok(Self {
            backend,
            dispatch,
            installed: true,
        })
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    pub fn dispatch(&self) -> &PointerDispatch {
        &self.dispatch
    }

    pub fn on_pointer_moved<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Point) + 'static,
    {
        self.dispatch.moved.subscribe(move |pt| callback(*pt))
    }

    pub fn on_middle_button_down<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.dispatch.middle_down.subscribe(move |_| callback())
    }

    pub fn on_simultaneous_chord<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.dispatch.simultaneous.subscribe(move |_| callback())
    }

    /// Remove a subscription from whichever signal owns it.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.dispatch.moved.unsubscribe(id)
            | self.dispatch.middle_down.unsubscribe(id)
            | self.dispatch.simultaneous.unsubscribe(id)
    }

    /// Uninstall the hook. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if !self.installed {
            return;
        }
        self.installed = false;
        if self.backend.uninstall() {
            info!("Low-level mouse hook uninstalled");
        } else {
            warn!("Failed to uninstall low-level mouse hook");
        }
    }
}

impl<B: PointerBackend> Drop for PointerEventHook<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn chord_resets_state_after_firing() {
        let dispatch = PointerDispatch::new();
        dispatch.process(RawPointerEvent::LeftDown);
        assert!(dispatch.chord_state().left_down);

        dispatch.process(RawPointerEvent::RightDown);
        assert_eq!(dispatch.chord_state(), PointerChordState::default());
    }

    #[test]
    fn move_does_not_touch_button_state() {
        let dispatch = PointerDispatch::new();
        dispatch.process(RawPointerEvent::RightDown);
        dispatch.process(RawPointerEvent::Move(Point::new(3, 4)));
        assert!(dispatch.chord_state().right_down);
        assert!(!dispatch.chord_state().left_down);
    }

    #[test]
    fn subscriber_can_read_state_while_signal_fires() {
        // The lock is released before callbacks run
        let dispatch = Rc::new(PointerDispatch::new());
        let seen = Rc::new(Cell::new(None));
        let d = Rc::clone(&dispatch);
        let s = Rc::clone(&seen);
        dispatch
            .simultaneous
            .subscribe(move |_| s.set(Some(d.chord_state())));

        dispatch.process(RawPointerEvent::LeftDown);
        dispatch.process(RawPointerEvent::RightDown);

        assert_eq!(seen.get(), Some(PointerChordState::default()));
    }
}
