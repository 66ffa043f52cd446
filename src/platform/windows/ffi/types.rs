//! Conversions between Win32 types and the crate's model types.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, POINT, RECT};

use crate::model::{Point, Rect, WindowHandle};

pub fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut c_void)
}

pub fn to_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as isize)
}

pub fn to_point(pt: POINT) -> Point {
    Point::new(pt.x, pt.y)
}

pub fn to_rect(rc: RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right, rc.bottom)
}

/// NUL-terminated UTF-16 copy of `s`.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
