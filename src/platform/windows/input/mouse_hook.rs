//! WH_MOUSE_LL hook feeding a [`PointerDispatch`].
//!
//! The hook procedure runs on the installing thread, so the dispatch lives
//! in a thread-local. Only one hook may be live per process.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicIsize, Ordering};

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HC_ACTION, HHOOK, MSLLHOOKSTRUCT,
    WH_MOUSE_LL, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEMOVE,
    WM_RBUTTONDOWN, WM_RBUTTONUP,
};

use crate::error::HookError;
use crate::input::{PointerBackend, PointerDispatch, RawPointerEvent};
use crate::platform::windows::ffi::to_point;

/// Set while a hook is installed anywhere in the process.
static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Global mouse hook handle (must be static for the hook callback).
static MOUSE_HOOK: AtomicIsize = AtomicIsize::new(0);

thread_local! {
    static HOOK_DISPATCH: RefCell<Option<Rc<PointerDispatch>>> = const { RefCell::new(None) };
}

fn translate(wparam: WPARAM, lparam: LPARAM) -> RawPointerEvent {
    match wparam.0 as u32 {
        WM_MOUSEMOVE => {
            let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
            RawPointerEvent::Move(to_point(info.pt))
        }
        WM_LBUTTONDOWN => RawPointerEvent::LeftDown,
        WM_LBUTTONUP => RawPointerEvent::LeftUp,
        WM_RBUTTONDOWN => RawPointerEvent::RightDown,
        WM_RBUTTONUP => RawPointerEvent::RightUp,
        WM_MBUTTONDOWN => RawPointerEvent::MiddleDown,
        WM_MBUTTONUP => RawPointerEvent::MiddleUp,
        _ => RawPointerEvent::Other,
    }
}

/// Low-level mouse hook procedure. Never swallows input.
extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if ncode == HC_ACTION as i32 {
        let dispatch = HOOK_DISPATCH.with(|d| d.try_borrow().ok().and_then(|d| d.clone()));
        if let Some(dispatch) = dispatch {
            dispatch.process(translate(wparam, lparam));
        }
    }

    let hook = MOUSE_HOOK.load(Ordering::SeqCst);
    unsafe { CallNextHookEx(Some(HHOOK(hook as *mut _)), ncode, wparam, lparam) }
}

/// Installs and removes the process's WH_MOUSE_LL hook.
#[derive(Debug, Default)]
pub struct Win32PointerBackend {
    owns_hook: bool,
}

impl Win32PointerBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PointerBackend for Win32PointerBackend {
    fn install(&mut self, dispatch: Rc<PointerDispatch>) -> Result<(), HookError> {
        if HOOK_INSTALLED
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(HookError::AlreadyInstalled);
        }

        HOOK_DISPATCH.with(|d| *d.borrow_mut() = Some(dispatch));
        match unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) } {
            Ok(hook) => {
                MOUSE_HOOK.store(hook.0 as isize, Ordering::SeqCst);
                self.owns_hook = true;
                Ok(())
            }
            Err(e) => {
                HOOK_DISPATCH.with(|d| *d.borrow_mut() = None);
                HOOK_INSTALLED.store(false, Ordering::SeqCst);
                Err(HookError::InstallFailed(format!("SetWindowsHookExW failed: {e}")))
            }
        }
    }

    fn uninstall(&mut self) -> bool {
        if !self.owns_hook {
            return true;
        }
        self.owns_hook = false;

        let hook = MOUSE_HOOK.swap(0, Ordering::SeqCst);
        let removed = unsafe { UnhookWindowsHookEx(HHOOK(hook as *mut _)) }.is_ok();
        HOOK_DISPATCH.with(|d| *d.borrow_mut() = None);
        HOOK_INSTALLED.store(false, Ordering::SeqCst);
        removed
    }
}
