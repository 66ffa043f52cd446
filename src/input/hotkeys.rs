//! System-wide hotkey registration.
//!
//! A [`HotkeyRegistry`] owns one hotkey id on one host window. Creating it
//! attaches a dispatch path to the host window's message stream; the OS
//! binding itself is only made by [`HotkeyRegistry::register`], so a
//! combination can be configured while disabled.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::HotkeyError;
use crate::events::{Subscribers, SubscriptionId};
use crate::model::constants::MAX_MODIFIER_SELECTIONS;
use crate::model::{HotkeyBinding, Key, Modifiers, WindowHandle};

/// Callbacks fired when the OS delivers this registry's hotkey.
pub type HotkeyDispatch = Rc<Subscribers<()>>;

/// OS side of a hotkey: message-stream attachment plus (un)registration.
///
/// One backend instance serves exactly one registry.
pub trait HotkeyBackend {
    /// Route hotkey notifications carrying `id` on `host` to `dispatch`.
    fn attach(
        &mut self,
        host: WindowHandle,
        id: i32,
        dispatch: HotkeyDispatch,
    ) -> Result<(), HotkeyError>;

    /// Undo [`attach`](HotkeyBackend::attach). Must tolerate a destroyed host.
    fn detach(&mut self, host: WindowHandle, id: i32);

    /// `modifiers` is the native flag set, `vk` the virtual-key code.
    /// Returns false if the OS refuses (combination owned elsewhere).
    fn register(&mut self, host: WindowHandle, id: i32, modifiers: u32, vk: u32) -> bool;

    fn unregister(&mut self, host: WindowHandle, id: i32) -> bool;
}

/// One logical hotkey bound to a host window.
pub struct HotkeyRegistry<B: HotkeyBackend> {
    backend: B,
    host: WindowHandle,
    id: i32,
    binding: HotkeyBinding,
    registered: bool,
    disposed: bool,
    on_pressed: HotkeyDispatch,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    /// Attach to `host` without registering anything yet.
    ///
    /// Fails with [`HotkeyError::InvalidBinding`] for [`Key::NONE`], with
    /// [`HotkeyError::TooManyModifiers`] for a set that cannot be persisted,
    /// and with [`HotkeyError::HookAttachFailed`] if the host window cannot
    /// be hooked.
    pub fn create(
        mut backend: B,
        host: WindowHandle,
        id: i32,
        modifiers: Modifiers,
        key: Key,
    ) -> Result<Self, HotkeyError> {
        check_binding(modifiers, key)?;
        let on_pressed: HotkeyDispatch = Rc::new(Subscribers::new());
        backend.attach(host, id, Rc::clone(&on_pressed))?;
        debug!(id, %host, "Hotkey dispatch attached");

        Ok(Self {
            backend,
            host,
            id,
            binding: HotkeyBinding::new(modifiers, key),
            registered: false,
            disposed: false,
            on_pressed,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn binding(&self) -> HotkeyBinding {
        self.binding
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Register the stored combination with the OS.
    ///
    /// Returns false without side effects when already registered, and
    /// false when the OS refuses; the caller surfaces the latter to the user.
    pub fn register(&mut self) -> bool {
        if self.registered || self.disposed {
            return false;
        }
        let modifiers = self.binding.modifiers.to_native();
        let vk = u32::from(self.binding.key.vk());
        if !self.backend.register(self.host, self.id, modifiers, vk) {
            warn!(id = self.id, binding = %self.binding, "Hotkey registration refused, combination may be in use");
            return false;
        }
        self.registered = true;
        info!(id = self.id, binding = %self.binding, "Hotkey registered");
        true
    }

    /// Release the OS binding. Returns false if not registered.
    pub fn unregister(&mut self) -> bool {
        if !self.registered {
            return false;
        }
        if !self.backend.unregister(self.host, self.id) {
            warn!(id = self.id, "Hotkey unregistration failed");
            return false;
        }
        self.registered = false;
        debug!(id = self.id, "Hotkey unregistered");
        true
    }

    /// Store a new combination. Registration state is untouched; call
    /// `unregister` + `register` to apply it.
    pub fn change_binding(&mut self, modifiers: Modifiers, key: Key) -> Result<(), HotkeyError> {
        check_binding(modifiers, key)?;
        self.binding = HotkeyBinding::new(modifiers, key);
        Ok(())
    }

    /// Subscribe to presses. Fires on the thread that delivers the OS message.
    pub fn on_pressed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.on_pressed.subscribe(move |_| callback())
    }

    pub fn remove_pressed_handler(&self, id: SubscriptionId) -> bool {
        self.on_pressed.unsubscribe(id)
    }

    /// Unregister (if registered) and detach. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.registered && !self.unregister() {
            // Nothing can recover this during teardown
            warn!(id = self.id, "Hotkey still registered at disposal");
            self.registered = false;
        }
        self.backend.detach(self.host, self.id);
        self.on_pressed.clear();
    }
}

fn check_binding(modifiers: Modifiers, key: Key) -> Result<(), HotkeyError> {
    if key.is_none() {
        return Err(HotkeyError::InvalidBinding);
    }
    if !modifiers.fits_selections() {
        return Err(HotkeyError::TooManyModifiers {
            got: modifiers.count(),
            max: MAX_MODIFIER_SELECTIONS,
        });
    }
    Ok(())
}

impl<B: HotkeyBackend> Drop for HotkeyRegistry<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}
