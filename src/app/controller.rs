//! The operations the presentation layer drives.
//!
//! [`Controller`] owns the two hotkeys, the subscriptions on the shared
//! pointer hook, the full window list and the target group. Trigger handlers
//! share the target group through `Rc<RefCell<..>>`; a handler that fires
//! while the group is already borrowed (re-entrant OS delivery) skips that
//! event instead of panicking.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use crate::error::{AppError, HotkeyError};
use crate::events::{EventPublisher, Notification, SubscriptionId};
use crate::input::{HotkeyBackend, HotkeyRegistry, PointerBackend, PointerEventHook};
use crate::model::constants::{HOTKEY_SELF, HOTKEY_TARGETS};
use crate::model::{
    HotkeyBinding, HotkeyKind, Key, ListPolicy, Modifiers, TrackedWindow, TriggerMode,
    WindowChange, WindowHandle,
};
use crate::storage::Settings;
use crate::toggle::{RefreshReport, TargetGroup, VisibilityController, WindowDirectory, WindowSystem};

/// Core facade: target group membership, trigger modes and bindings.
pub struct Controller<S, H, P>
where
    S: WindowSystem + 'static,
    H: HotkeyBackend,
    P: PointerBackend,
{
    settings: Settings,
    system: Rc<S>,
    directory: WindowDirectory<S>,
    visibility: VisibilityController<S>,
    targets: Rc<RefCell<TargetGroup>>,
    self_window: Rc<RefCell<TrackedWindow>>,
    target_hotkey: HotkeyRegistry<H>,
    self_hotkey: HotkeyRegistry<H>,
    pointer: Rc<PointerEventHook<P>>,
    pointer_subscriptions: HashMap<TriggerMode, SubscriptionId>,
    all_windows: Vec<TrackedWindow>,
    publisher: EventPublisher,
}

impl<S, H, P> Controller<S, H, P>
where
    S: WindowSystem + 'static,
    H: HotkeyBackend,
    P: PointerBackend,
{
    /// Build the controller and apply `settings`.
    ///
    /// Attaches both hotkeys to `host`, runs the first enumeration (which
    /// re-matches persisted target paths against visible windows) and
    /// enables the stored trigger modes. A hotkey that cannot be registered
    /// at startup is logged, not reported.
    pub fn new(
        system: Rc<S>,
        pointer: Rc<PointerEventHook<P>>,
        host: WindowHandle,
        target_backend: H,
        self_backend: H,
        publisher: EventPublisher,
        mut settings: Settings,
    ) -> Result<Self, AppError> {
        settings.validate();
        let target_binding = settings.binding(HotkeyKind::Targets);
        let self_binding = settings.binding(HotkeyKind::SelfWindow);

        let target_hotkey = HotkeyRegistry::create(
            target_backend,
            host,
            HOTKEY_TARGETS,
            target_binding.modifiers,
            target_binding.key,
        )?;
        let self_hotkey = HotkeyRegistry::create(
            self_backend,
            host,
            HOTKEY_SELF,
            self_binding.modifiers,
            self_binding.key,
        )?;

        let directory = WindowDirectory::new(Rc::clone(&system));
        // Treated as shown until the first self toggle
        let mut host_window = directory.describe(host);
        host_window.set_visible(true);

        let visibility = VisibilityController::new(Rc::clone(&system));
        let mut controller = Self {
            directory,
            system,
            visibility,
            targets: Rc::new(RefCell::new(TargetGroup::new())),
            self_window: Rc::new(RefCell::new(host_window)),
            target_hotkey,
            self_hotkey,
            pointer,
            pointer_subscriptions: HashMap::new(),
            all_windows: Vec::new(),
            publisher,
            settings: Settings::default(),
        };
        controller.connect_hotkeys();

        let pending_paths = std::mem::take(&mut settings.target_app_paths);
        controller.settings = settings;
        controller.all_windows = controller.directory.enumerate_all(controller.settings.policy());
        controller.rematch_targets(&pending_paths);

        for mode in TriggerMode::ALL {
            if controller.settings.is_mode_enabled(mode) && !controller.apply_mode(mode, true) {
                warn!(%mode, "Trigger mode could not be enabled at startup");
            }
        }

        info!(
            windows = controller.all_windows.len(),
            targets = controller.targets.borrow().len(),
            "Controller ready"
        );
        Ok(controller)
    }

    fn connect_hotkeys(&self) {
        let targets = Rc::clone(&self.targets);
        let visibility = self.visibility.clone();
        self.target_hotkey.on_pressed(move || {
            toggle_group(&targets, &visibility);
        });

        let self_window = Rc::clone(&self.self_window);
        let visibility = self.visibility.clone();
        self.self_hotkey.on_pressed(move || match self_window.try_borrow_mut() {
            Ok(mut window) => {
                visibility.toggle(&mut window);
            }
            Err(_) => debug!("Host window busy, self toggle skipped"),
        });
    }

    /// A window becomes a target iff its path was persisted and it is visible.
    fn rematch_targets(&mut self, paths: &[String]) {
        if paths.is_empty() {
            return;
        }
        let matches: Vec<TrackedWindow> = self
            .all_windows
            .iter()
            .filter(|w| w.is_visible() && paths.iter().any(|p| *p == w.executable_path))
            .cloned()
            .collect();
        for window in matches {
            self.add_to_target_group(window);
        }
    }

    // === Target group membership ===

    /// Add `window` to the target group, unless its handle is already there.
    ///
    /// Captures the window's current placement rectangle and forwards its
    /// title and visibility changes to the notification bus.
    pub fn add_to_target_group(&mut self, mut window: TrackedWindow) -> bool {
        let handle = window.handle;
        if self.targets.borrow().contains(handle) {
            return false;
        }
        self.visibility.refresh_rect(&mut window);

        let publisher = self.publisher.clone();
        window.subscribe(move |change| {
            publisher.publish(match change {
                WindowChange::Title(title) => Notification::TitleChanged {
                    handle,
                    title: title.clone(),
                },
                WindowChange::Visibility(visible) => Notification::VisibilityChanged {
                    handle,
                    visible: *visible,
                },
            })
        });

        let added = self.targets.borrow_mut().add(window);
        if added {
            self.publisher.publish(Notification::TargetAdded(handle));
        }
        added
    }

    pub fn remove_from_target_group(&mut self, handle: WindowHandle) -> bool {
        let removed = self.targets.borrow_mut().remove(handle).is_some();
        if removed {
            self.publisher.publish(Notification::TargetRemoved(handle));
        }
        removed
    }

    pub fn clear_target_group(&mut self) {
        self.targets.borrow_mut().clear();
        self.publisher.publish(Notification::TargetsCleared);
    }

    pub fn show_target(&mut self, handle: WindowHandle) -> bool {
        self.targets.borrow_mut().show(&self.visibility, handle)
    }

    pub fn hide_target(&mut self, handle: WindowHandle) -> bool {
        self.targets.borrow_mut().hide(&self.visibility, handle)
    }

    /// Bring back every target we hid, e.g. before the process exits.
    pub fn restore_targets(&mut self) -> usize {
        let shown = self.targets.borrow_mut().show_hidden(&self.visibility);
        if shown > 0 {
            info!(shown, "Hidden targets restored");
        }
        shown
    }

    pub fn targets(&self) -> Ref<'_, TargetGroup> {
        self.targets.borrow()
    }

    // === Triggers ===

    pub fn toggle_targets(&self) {
        toggle_group(&self.targets, &self.visibility);
    }

    pub fn toggle_self(&self) {
        self.visibility.toggle(&mut self.self_window.borrow_mut());
    }

    pub fn self_window(&self) -> Ref<'_, TrackedWindow> {
        self.self_window.borrow()
    }

    pub fn is_mode_enabled(&self, mode: TriggerMode) -> bool {
        self.settings.is_mode_enabled(mode)
    }

    /// Switch a trigger on or off and remember the choice.
    ///
    /// Returns false when a hotkey mode could not be registered; a
    /// [`Notification::HotkeyInUse`] is published in that case.
    pub fn set_trigger_mode_enabled(&mut self, mode: TriggerMode, enabled: bool) -> bool {
        self.settings.set_mode_enabled(mode, enabled);
        let applied = self.apply_mode(mode, enabled);
        if !applied && enabled {
            if let Some(kind) = mode.hotkey() {
                self.publisher.publish(Notification::HotkeyInUse(kind));
            }
        }
        applied
    }

    fn apply_mode(&mut self, mode: TriggerMode, enabled: bool) -> bool {
        if let Some(kind) = mode.hotkey() {
            let registry = self.registry_mut(kind);
            return if enabled {
                registry.is_registered() || registry.register()
            } else {
                registry.unregister();
                !registry.is_registered()
            };
        }

        if !enabled {
            if let Some(id) = self.pointer_subscriptions.remove(&mode) {
                self.pointer.unsubscribe(id);
                debug!(%mode, "Pointer trigger disabled");
            }
            return true;
        }
        if self.pointer_subscriptions.contains_key(&mode) {
            return true;
        }

        let targets = Rc::clone(&self.targets);
        let visibility = self.visibility.clone();
        let id = match mode {
            TriggerMode::MiddleClick => self
                .pointer
                .on_middle_button_down(move || toggle_group(&targets, &visibility)),
            TriggerMode::Chord => self
                .pointer
                .on_simultaneous_chord(move || toggle_group(&targets, &visibility)),
            TriggerMode::PointerPosition => self.pointer.on_pointer_moved(move |point| {
                match targets.try_borrow_mut() {
                    Ok(mut group) => group.follow_pointer(&visibility, point),
                    Err(_) => trace!("Target group busy, pointer move skipped"),
                }
            }),
            TriggerMode::Hotkey | TriggerMode::SelfHotkey => return false,
        };
        self.pointer_subscriptions.insert(mode, id);
        debug!(%mode, "Pointer trigger enabled");
        true
    }

    fn registry_mut(&mut self, kind: HotkeyKind) -> &mut HotkeyRegistry<H> {
        match kind {
            HotkeyKind::Targets => &mut self.target_hotkey,
            HotkeyKind::SelfWindow => &mut self.self_hotkey,
        }
    }

    fn registry(&self, kind: HotkeyKind) -> &HotkeyRegistry<H> {
        match kind {
            HotkeyKind::Targets => &self.target_hotkey,
            HotkeyKind::SelfWindow => &self.self_hotkey,
        }
    }

    pub fn hotkey_binding(&self, kind: HotkeyKind) -> HotkeyBinding {
        self.registry(kind).binding()
    }

    pub fn is_hotkey_registered(&self, kind: HotkeyKind) -> bool {
        self.registry(kind).is_registered()
    }

    /// Store a new combination for `kind`, re-registering it if its mode is on.
    ///
    /// Returns `Ok(false)` (and publishes [`Notification::HotkeyInUse`]) when
    /// the new combination is refused by the OS. Combinations that cannot be
    /// persisted are rejected before anything changes.
    pub fn set_hotkey_binding(
        &mut self,
        kind: HotkeyKind,
        modifiers: Modifiers,
        key: Key,
    ) -> Result<bool, HotkeyError> {
        let mode = match kind {
            HotkeyKind::Targets => TriggerMode::Hotkey,
            HotkeyKind::SelfWindow => TriggerMode::SelfHotkey,
        };
        let enabled = self.settings.is_mode_enabled(mode);

        let registry = self.registry_mut(kind);
        registry.change_binding(modifiers, key)?;
        let binding = registry.binding();
        let applied = if enabled {
            registry.unregister();
            registry.register()
        } else {
            true
        };

        self.settings.set_binding(kind, binding);
        info!(?kind, %binding, "Hotkey binding changed");
        if !applied {
            self.publisher.publish(Notification::HotkeyInUse(kind));
        }
        Ok(applied)
    }

    // === Window list ===

    pub fn all_windows(&self) -> &[TrackedWindow] {
        &self.all_windows
    }

    pub fn list_policy(&self) -> ListPolicy {
        self.settings.policy()
    }

    /// Change which windows the full list admits and re-enumerate.
    pub fn set_list_policy(&mut self, policy: ListPolicy) {
        self.settings.set_policy(policy);
        self.all_windows = self.directory.enumerate_all(policy);
    }

    /// Re-enumerate, drop dead targets, refresh target titles and rectangles.
    pub fn request_refresh(&mut self) -> RefreshReport {
        self.all_windows = self.directory.enumerate_all(self.settings.policy());

        let report = {
            let mut group = self.targets.borrow_mut();
            let report = group.refresh(&self.directory);
            group.refresh_rects(&self.visibility);
            report
        };
        for handle in &report.removed {
            self.publisher.publish(Notification::TargetRemoved(*handle));
        }

        let host = self.self_window.borrow().handle;
        if self.system.is_window(host) {
            self.self_window.borrow_mut().set_title(self.system.title(host));
        }
        report
    }

    /// Current settings, with the target group's executable paths.
    pub fn snapshot_settings(&self) -> Settings {
        let mut settings = self.settings.clone();
        let mut paths: Vec<String> = Vec::new();
        for path in self.targets.borrow().executable_paths() {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        settings.target_app_paths = paths;
        settings
    }
}

impl<S, H, P> Drop for Controller<S, H, P>
where
    S: WindowSystem + 'static,
    H: HotkeyBackend,
    P: PointerBackend,
{
    fn drop(&mut self) {
        // The pointer hook may outlive us; its handlers hold our target group
        for (_, id) in self.pointer_subscriptions.drain() {
            self.pointer.unsubscribe(id);
        }
    }
}

fn toggle_group<S: WindowSystem>(
    targets: &RefCell<TargetGroup>,
    visibility: &VisibilityController<S>,
) {
    match targets.try_borrow_mut() {
        Ok(mut group) => group.toggle_all(visibility),
        Err(_) => debug!("Target group busy, toggle skipped"),
    }
}
