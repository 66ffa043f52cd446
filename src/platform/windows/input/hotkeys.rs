//! Global hotkeys via RegisterHotKey.
//!
//! The host window procedure forwards every WM_HOTKEY to
//! [`deliver_hotkey`], which looks the (window, id) pair up in a per-thread
//! table filled by [`Win32HotkeyBackend::attach`].

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS,
};
use windows::Win32::UI::WindowsAndMessaging::IsWindow;

use crate::error::HotkeyError;
use crate::input::{HotkeyBackend, HotkeyDispatch};
use crate::model::WindowHandle;
use crate::platform::windows::ffi::to_hwnd;

// Hotkey messages arrive on the thread that owns the host window
thread_local! {
    static HOTKEY_ROUTES: RefCell<HashMap<(WindowHandle, i32), HotkeyDispatch>> =
        RefCell::new(HashMap::new());
}

/// Fire the subscribers attached for `id` on `host`.
///
/// Returns false when no registry is attached for the pair.
pub fn deliver_hotkey(host: WindowHandle, id: i32) -> bool {
    // Clone out of the table so subscribers may attach or detach
    let dispatch = HOTKEY_ROUTES.with(|routes| routes.borrow().get(&(host, id)).cloned());
    match dispatch {
        Some(dispatch) => {
            dispatch.emit(&());
            true
        }
        None => {
            debug!(id, %host, "WM_HOTKEY without an attached registry");
            false
        }
    }
}

/// One hotkey id on one host window.
#[derive(Debug, Default)]
pub struct Win32HotkeyBackend;

impl Win32HotkeyBackend {
    pub fn new() -> Self {
        Self
    }
}

impl HotkeyBackend for Win32HotkeyBackend {
    fn attach(
        &mut self,
        host: WindowHandle,
        id: i32,
        dispatch: HotkeyDispatch,
    ) -> Result<(), HotkeyError> {
        if !unsafe { IsWindow(Some(to_hwnd(host))) }.as_bool() {
            return Err(HotkeyError::HookAttachFailed(format!(
                "{host} is not a window"
            )));
        }
        let attached = HOTKEY_ROUTES.with(|routes| match routes.borrow_mut().entry((host, id)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(dispatch);
                true
            }
        });
        if !attached {
            return Err(HotkeyError::HookAttachFailed(format!(
                "hotkey id {id} already attached to {host}"
            )));
        }
        Ok(())
    }

    fn detach(&mut self, host: WindowHandle, id: i32) {
        HOTKEY_ROUTES.with(|routes| routes.borrow_mut().remove(&(host, id)));
    }

    fn register(&mut self, host: WindowHandle, id: i32, modifiers: u32, vk: u32) -> bool {
        unsafe { RegisterHotKey(Some(to_hwnd(host)), id, HOT_KEY_MODIFIERS(modifiers), vk) }
            .is_ok()
    }

    fn unregister(&mut self, host: WindowHandle, id: i32) -> bool {
        unsafe { UnregisterHotKey(Some(to_hwnd(host)), id) }.is_ok()
    }
}
