//! Windows entry point: host window, controller and message loop.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{error, info, warn};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::VK_F5;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, PostQuitMessage, ShowWindow,
    TranslateMessage, MSG, SW_SHOW, WM_CLOSE, WM_DESTROY, WM_HOTKEY, WM_KEYDOWN,
};

use wintoggle::events::EventBus;
use wintoggle::platform::windows::ffi::to_handle;
use wintoggle::platform::windows::{
    create_host_window, deliver_hotkey, dispatch_notifications, Win32HotkeyBackend,
    Win32PointerBackend, Win32WindowSystem,
};
use wintoggle::storage::{load_settings, save_settings};
use wintoggle::toggle::WindowDirectory;
use wintoggle::{AppError, Controller, PointerEventHook};

type AppController = Controller<Win32WindowSystem, Win32HotkeyBackend, Win32PointerBackend>;

/// Everything the window procedure needs, owned by the UI thread.
struct HostState {
    controller: AppController,
    config_path: PathBuf,
}

thread_local! {
    static HOST: RefCell<Option<HostState>> = const { RefCell::new(None) };
}

/// Print every window the stored list filters admit.
pub fn list_windows(config_path: &Path) {
    let settings = load_settings(config_path);
    let directory = WindowDirectory::new(Rc::new(Win32WindowSystem::new()));
    for window in directory.enumerate_all(settings.policy()) {
        println!(
            "{:>12}  {}  {:<40}  {}",
            window.handle.to_string(),
            window.visibility_text(),
            window.title(),
            window.executable_path
        );
    }
}

/// Run the toggler until the host window is closed.
pub fn run(config_path: PathBuf) -> Result<(), AppError> {
    let settings = load_settings(&config_path);
    let hwnd = create_host_window(Some(wndproc))?;

    let pointer = Rc::new(PointerEventHook::install(Win32PointerBackend::new())?);
    let bus = EventBus::new();
    let controller = Controller::new(
        Rc::new(Win32WindowSystem::new()),
        pointer,
        to_handle(hwnd),
        Win32HotkeyBackend::new(),
        Win32HotkeyBackend::new(),
        bus.publisher(),
        settings,
    )?;
    HOST.with(|h| {
        *h.borrow_mut() = Some(HostState {
            controller,
            config_path,
        })
    });

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }
    info!("Window toggler running");

    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
            dispatch_notifications(hwnd, &bus);
        }
    }

    // Normally already done by WM_CLOSE
    shutdown();
    Ok(())
}

/// Show hidden targets, save settings, then release the hotkeys and the
/// mouse hook.
fn shutdown() {
    let Some(mut state) = HOST.with(|h| h.borrow_mut().take()) else {
        return;
    };
    // Nothing could show them once we are gone
    state.controller.restore_targets();
    let settings = state.controller.snapshot_settings();
    if let Err(e) = save_settings(&state.config_path, &settings) {
        warn!(error = %e, "Failed to save settings");
    }
    drop(state);
    info!("Hotkeys and mouse hook released");
}

fn with_controller(f: impl FnOnce(&mut AppController)) {
    HOST.with(|h| match h.try_borrow_mut() {
        Ok(mut host) => {
            if let Some(state) = host.as_mut() {
                f(&mut state.controller);
            }
        }
        Err(_) => error!("Controller busy, host command dropped"),
    });
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_HOTKEY => {
                deliver_hotkey(to_handle(hwnd), wparam.0 as i32);
                LRESULT(0)
            }

            WM_KEYDOWN if wparam.0 == usize::from(VK_F5.0) => {
                with_controller(|controller| {
                    let report = controller.request_refresh();
                    info!(
                        windows = controller.all_windows().len(),
                        removed = report.removed.len(),
                        "Refreshed"
                    );
                });
                LRESULT(0)
            }

            WM_CLOSE => {
                shutdown();
                let _ = DestroyWindow(hwnd);
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
