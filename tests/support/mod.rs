//! In-memory stand-ins for the OS, shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wintoggle::error::{HookError, HotkeyError, ProcessPathError};
use wintoggle::input::{HotkeyBackend, HotkeyDispatch, PointerBackend, PointerDispatch, RawPointerEvent};
use wintoggle::model::{Rect, WindowHandle};
use wintoggle::toggle::WindowSystem;

// === Windows ===

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub title: String,
    pub enabled: bool,
    pub visible: bool,
    pub alive: bool,
    pub process_id: u32,
    pub path: Result<String, ProcessPathError>,
    pub rect: Option<Rect>,
}

impl FakeWindow {
    /// An enabled, visible, titled window.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            enabled: true,
            visible: true,
            alive: true,
            process_id: 0,
            path: Ok(format!("C:\\Apps\\{}.exe", title.to_lowercase())),
            rect: Some(Rect::new(0, 0, 100, 100)),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Ok(path.to_string());
        self
    }

    pub fn path_error(mut self, err: ProcessPathError) -> Self {
        self.path = Err(err);
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn pid(mut self, pid: u32) -> Self {
        self.process_id = pid;
        self
    }
}

/// Show/hide calls the fake received, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityCall {
    Show(WindowHandle),
    Hide(WindowHandle),
}

#[derive(Default)]
pub struct FakeWindowSystem {
    order: RefCell<Vec<WindowHandle>>,
    windows: RefCell<HashMap<WindowHandle, FakeWindow>>,
    calls: RefCell<Vec<VisibilityCall>>,
}

impl FakeWindowSystem {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a window; a zero process id becomes `raw`.
    pub fn add(&self, raw: isize, mut window: FakeWindow) -> WindowHandle {
        let handle = WindowHandle(raw);
        if window.process_id == 0 {
            window.process_id = raw as u32;
        }
        self.order.borrow_mut().push(handle);
        self.windows.borrow_mut().insert(handle, window);
        handle
    }

    /// The window is destroyed; its handle stays in enumeration order.
    pub fn kill(&self, handle: WindowHandle) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&handle) {
            w.alive = false;
        }
    }

    pub fn retitle(&self, handle: WindowHandle, title: &str) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&handle) {
            w.title = title.to_string();
        }
    }

    pub fn move_to(&self, handle: WindowHandle, rect: Rect) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&handle) {
            w.rect = Some(rect);
        }
    }

    pub fn os_visible(&self, handle: WindowHandle) -> bool {
        self.windows.borrow().get(&handle).map(|w| w.visible).unwrap_or(false)
    }

    pub fn calls(&self) -> Vec<VisibilityCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn with_live<T>(&self, handle: WindowHandle, default: T, f: impl FnOnce(&FakeWindow) -> T) -> T {
        match self.windows.borrow().get(&handle) {
            Some(w) if w.alive => f(w),
            _ => default,
        }
    }

    fn set_os_visible(&self, handle: WindowHandle, visible: bool) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&handle) {
            if w.alive {
                w.visible = visible;
            }
        }
    }
}

impl WindowSystem for FakeWindowSystem {
    fn top_level_windows(&self) -> Vec<WindowHandle> {
        self.order.borrow().clone()
    }

    fn is_window(&self, handle: WindowHandle) -> bool {
        self.with_live(handle, false, |_| true)
    }

    fn is_enabled(&self, handle: WindowHandle) -> bool {
        self.with_live(handle, false, |w| w.enabled)
    }

    fn is_visible(&self, handle: WindowHandle) -> bool {
        self.with_live(handle, false, |w| w.visible)
    }

    fn title(&self, handle: WindowHandle) -> String {
        self.with_live(handle, String::new(), |w| w.title.clone())
    }

    fn process_id(&self, handle: WindowHandle) -> u32 {
        self.with_live(handle, 0, |w| w.process_id)
    }

    fn executable_path(&self, process_id: u32) -> Result<String, ProcessPathError> {
        self.windows
            .borrow()
            .values()
            .find(|w| w.alive && w.process_id == process_id)
            .map(|w| w.path.clone())
            .unwrap_or(Err(ProcessPathError::Unavailable))
    }

    fn show_normal(&self, handle: WindowHandle) {
        self.calls.borrow_mut().push(VisibilityCall::Show(handle));
        self.set_os_visible(handle, true);
    }

    fn hide(&self, handle: WindowHandle) {
        self.calls.borrow_mut().push(VisibilityCall::Hide(handle));
        self.set_os_visible(handle, false);
    }

    fn normal_placement(&self, handle: WindowHandle) -> Option<Rect> {
        self.with_live(handle, None, |w| w.rect)
    }
}

// === Hotkeys ===

/// What every [`FakeHotkeyBackend`] sharing this log was asked to do.
#[derive(Default)]
pub struct HotkeyLog {
    pub attached: Vec<(WindowHandle, i32)>,
    pub detached: Vec<(WindowHandle, i32)>,
    /// (id, native modifiers, vk)
    pub registered: Vec<(i32, u32, u32)>,
    pub unregistered: Vec<i32>,
    /// Ids the OS refuses to register.
    pub refuse: Vec<i32>,
    pub fail_attach: bool,
    routes: HashMap<i32, HotkeyDispatch>,
}

pub type SharedHotkeyLog = Rc<RefCell<HotkeyLog>>;

pub struct FakeHotkeyBackend {
    log: SharedHotkeyLog,
}

impl FakeHotkeyBackend {
    pub fn new(log: &SharedHotkeyLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

pub fn hotkey_log() -> SharedHotkeyLog {
    Rc::new(RefCell::new(HotkeyLog::default()))
}

/// Deliver the OS notification for `id`, as WM_HOTKEY would.
pub fn press(log: &SharedHotkeyLog, id: i32) -> bool {
    let dispatch = log.borrow().routes.get(&id).cloned();
    match dispatch {
        Some(dispatch) => {
            dispatch.emit(&());
            true
        }
        None => false,
    }
}

impl HotkeyBackend for FakeHotkeyBackend {
    fn attach(
        &mut self,
        host: WindowHandle,
        id: i32,
        dispatch: HotkeyDispatch,
    ) -> Result<(), HotkeyError> {
        let mut log = self.log.borrow_mut();
        if log.fail_attach {
            return Err(HotkeyError::HookAttachFailed("fake host is gone".to_string()));
        }
        log.attached.push((host, id));
        log.routes.insert(id, dispatch);
        Ok(())
    }

    fn detach(&mut self, host: WindowHandle, id: i32) {
        let mut log = self.log.borrow_mut();
        log.detached.push((host, id));
        log.routes.remove(&id);
    }

    fn register(&mut self, _host: WindowHandle, id: i32, modifiers: u32, vk: u32) -> bool {
        let mut log = self.log.borrow_mut();
        if log.refuse.contains(&id) {
            return false;
        }
        log.registered.push((id, modifiers, vk));
        true
    }

    fn unregister(&mut self, _host: WindowHandle, id: i32) -> bool {
        self.log.borrow_mut().unregistered.push(id);
        true
    }
}

// === Pointer hook ===

#[derive(Default)]
pub struct PointerLog {
    pub installs: usize,
    pub uninstalls: usize,
    pub fail_install: bool,
    dispatch: Option<Rc<PointerDispatch>>,
}

pub type SharedPointerLog = Rc<RefCell<PointerLog>>;

pub fn pointer_log() -> SharedPointerLog {
    Rc::new(RefCell::new(PointerLog::default()))
}

pub struct FakePointerBackend {
    log: SharedPointerLog,
}

impl FakePointerBackend {
    pub fn new(log: &SharedPointerLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

/// Push one raw event through the installed hook, as the OS would.
pub fn send(log: &SharedPointerLog, event: RawPointerEvent) {
    let dispatch = log.borrow().dispatch.clone();
    if let Some(dispatch) = dispatch {
        dispatch.process(event);
    }
}

impl PointerBackend for FakePointerBackend {
    fn install(&mut self, dispatch: Rc<PointerDispatch>) -> Result<(), HookError> {
        let mut log = self.log.borrow_mut();
        if log.fail_install {
            return Err(HookError::InstallFailed("fake refused".to_string()));
        }
        log.installs += 1;
        log.dispatch = Some(dispatch);
        Ok(())
    }

    fn uninstall(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        log.uninstalls += 1;
        log.dispatch = None;
        true
    }
}
