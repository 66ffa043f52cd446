//! [`WindowSystem`] on top of user32 and the process APIs.

use windows::core::{BOOL, PWSTR};
use windows::Win32::Foundation::{
    CloseHandle, ERROR_ACCESS_DENIED, ERROR_INSUFFICIENT_BUFFER, HWND, LPARAM,
};
use windows::Win32::System::Threading::{
    OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_FORMAT,
    PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows::Win32::UI::Input::KeyboardAndMouse::IsWindowEnabled;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowPlacement, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindow, IsWindowVisible, ShowWindow, SW_HIDE, SW_SHOWNORMAL,
    WINDOWPLACEMENT,
};

use super::ffi::{to_handle, to_hwnd, to_rect};
use crate::error::ProcessPathError;
use crate::platform::wide::{read_growing_wide, WideFill};
use crate::model::{Rect, WindowHandle};
use crate::toggle::WindowSystem;

/// First buffer size for QueryFullProcessImageNameW; grown on demand.
const PATH_BUFFER_LEN: usize = 1024;

/// Longest extended-length path Windows supports, plus the terminator.
const MAX_PATH_BUFFER_LEN: usize = 32_768;

/// The live Win32 window manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Callback for EnumWindows: `lparam` points at the output Vec.
unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam.0 as *mut Vec<WindowHandle>);
    handles.push(to_handle(hwnd));
    BOOL(1)
}

impl WindowSystem for Win32WindowSystem {
    fn top_level_windows(&self) -> Vec<WindowHandle> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            let ptr = &mut handles as *mut Vec<WindowHandle>;
            if let Err(e) = EnumWindows(Some(collect_window), LPARAM(ptr as isize)) {
                tracing::warn!(error = %e, "EnumWindows failed");
            }
        }
        handles
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindow(Some(to_hwnd(handle))).as_bool() }
    }

    fn is_enabled(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindowEnabled(to_hwnd(handle)).as_bool() }
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindowVisible(to_hwnd(handle)).as_bool() }
    }

    fn title(&self, handle: WindowHandle) -> String {
        unsafe {
            let hwnd = to_hwnd(handle);
            let len = GetWindowTextLengthW(hwnd);
            if len <= 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    fn process_id(&self, handle: WindowHandle) -> u32 {
        let mut pid = 0u32;
        unsafe {
            GetWindowThreadProcessId(to_hwnd(handle), Some(&mut pid));
        }
        pid
    }

    fn executable_path(&self, process_id: u32) -> Result<String, ProcessPathError> {
        let process =
            unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id) }
                .map_err(|e| {
                    if e.code() == ERROR_ACCESS_DENIED.to_hresult() {
                        ProcessPathError::AccessDenied
                    } else {
                        ProcessPathError::Unavailable
                    }
                })?;

        let path = read_growing_wide(PATH_BUFFER_LEN, MAX_PATH_BUFFER_LEN, |buffer| {
            let mut size = buffer.len() as u32;
            let queried = unsafe {
                QueryFullProcessImageNameW(
                    process,
                    PROCESS_NAME_FORMAT(0),
                    PWSTR(buffer.as_mut_ptr()),
                    &mut size,
                )
            };
            match queried {
                Ok(()) if size > 0 => WideFill::Done(size as usize),
                Err(e) if e.code() == ERROR_INSUFFICIENT_BUFFER.to_hresult() => WideFill::TooSmall,
                _ => WideFill::Failed,
            }
        });
        unsafe {
            let _ = CloseHandle(process);
        }
        path.ok_or(ProcessPathError::Unavailable)
    }

    fn show_normal(&self, handle: WindowHandle) {
        unsafe {
            let _ = ShowWindow(to_hwnd(handle), SW_SHOWNORMAL);
        }
    }

    fn hide(&self, handle: WindowHandle) {
        unsafe {
            let _ = ShowWindow(to_hwnd(handle), SW_HIDE);
        }
    }

    fn normal_placement(&self, handle: WindowHandle) -> Option<Rect> {
        let mut placement = WINDOWPLACEMENT {
            length: std::mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };
        unsafe { GetWindowPlacement(to_hwnd(handle), &mut placement) }.ok()?;
        Some(to_rect(placement.rcNormalPosition))
    }
}
