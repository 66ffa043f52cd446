//! Notification dispatcher for Windows.

use tracing::{debug, warn};
use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONWARNING, MB_OK};

use crate::events::{EventBus, Notification};
use crate::model::constants::HOST_WINDOW_TITLE;
use crate::platform::windows::ffi::to_wide;

/// Drain the bus: attention-worthy notices become message boxes, the rest
/// are logged.
///
/// Must be called from the thread that owns `hwnd`, outside any borrow of
/// the controller (the message box pumps messages).
pub fn dispatch_notifications(hwnd: HWND, bus: &EventBus) {
    for notification in bus.drain() {
        if notification.needs_user_attention() {
            warn!("{}", notification.description());
            show_notice(hwnd, &notification);
        } else {
            debug!("{}", notification.description());
        }
    }
}

fn show_notice(hwnd: HWND, notification: &Notification) {
    let text = to_wide(&notification.description());
    let caption = to_wide(HOST_WINDOW_TITLE);
    unsafe {
        let _ = MessageBoxW(
            Some(hwnd),
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | MB_ICONWARNING,
        );
    }
}
