//! The top-level window that owns the hotkeys.

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, LoadCursorW, RegisterClassW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT,
    IDC_ARROW, WINDOW_EX_STYLE, WNDCLASSW, WNDPROC, WS_OVERLAPPEDWINDOW,
};

use super::ffi::to_wide;
use crate::error::AppError;
use crate::model::constants::{HOST_CLASS_NAME, HOST_WINDOW_TITLE};

const HOST_WIDTH: i32 = 480;
const HOST_HEIGHT: i32 = 320;

/// Register the host class and create the (not yet shown) host window.
pub fn create_host_window(wndproc: WNDPROC) -> Result<HWND, AppError> {
    let class_name = to_wide(HOST_CLASS_NAME);
    let title = to_wide(HOST_WINDOW_TITLE);

    unsafe {
        let instance =
            GetModuleHandleW(None).map_err(|e| AppError::Platform(format!("GetModuleHandleW: {e}")))?;
        let cursor =
            LoadCursorW(None, IDC_ARROW).map_err(|e| AppError::Platform(format!("LoadCursorW: {e}")))?;

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: wndproc,
            hInstance: instance.into(),
            hCursor: cursor,
            lpszClassName: PCWSTR(class_name.as_ptr()),
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(AppError::Platform("RegisterClassW failed".to_string()));
        }

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            HOST_WIDTH,
            HOST_HEIGHT,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .map_err(|e| AppError::Platform(format!("CreateWindowExW: {e}")))
    }
}
