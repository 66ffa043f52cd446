//! Tests for the model layer (bindings, geometry, tracked windows).

use std::cell::Cell;
use std::rc::Rc;

use wintoggle::model::constants::*;
use wintoggle::model::{
    HotkeyBinding, Key, Modifiers, Point, Rect, TrackedWindow, TriggerMode, WindowHandle,
};

// === Default Binding Tests ===

#[test]
fn default_target_selections_parse() {
    let binding = HotkeyBinding::from_selections(DEFAULT_TARGET_MODIFIERS, DEFAULT_TARGET_KEY)
        .unwrap();
    assert_eq!(binding.modifiers, Modifiers::CONTROL | Modifiers::ALT);
    assert_eq!(binding.key.vk(), 0x48);
}

#[test]
fn default_self_selections_parse() {
    let binding =
        HotkeyBinding::from_selections(DEFAULT_SELF_MODIFIERS, DEFAULT_SELF_KEY).unwrap();
    assert_eq!(binding.to_string(), "Control+Alt+W");
}

#[test]
fn hotkey_ids_are_distinct() {
    assert_ne!(HOTKEY_SELF, HOTKEY_TARGETS);
}

// === Modifier Tests ===

#[test]
fn native_flags_match_os_values() {
    assert_eq!(Modifiers::ALT.to_native(), 0x0001 | 0x4000);
    assert_eq!(Modifiers::CONTROL.to_native(), 0x0002 | 0x4000);
    assert_eq!(Modifiers::SHIFT.to_native(), 0x0004 | 0x4000);
    assert_eq!(Modifiers::META.to_native(), 0x0008 | 0x4000);
}

#[test]
fn repeated_selection_is_idempotent() {
    let mods = Modifiers::from_selections(["Alt", "Alt", "None"]).unwrap();
    assert_eq!(mods, Modifiers::ALT);
}

#[test]
fn selection_aliases() {
    let mods = Modifiers::from_selections(["Ctrl", "Win", ""]).unwrap();
    assert_eq!(mods, Modifiers::CONTROL | Modifiers::META);
}

#[test]
fn three_modifiers_round_trip_through_selections() {
    let mods = Modifiers::CONTROL | Modifiers::SHIFT | Modifiers::META;
    let sel = mods.to_selections();
    let back = Modifiers::from_selections(sel.iter().map(String::as_str)).unwrap();
    assert_eq!(back, mods);
}

#[test]
fn binding_display_names_every_modifier() {
    let binding = HotkeyBinding::new(Modifiers::all(), "K".parse().unwrap());
    assert_eq!(binding.to_string(), "Control+Alt+Shift+Meta+K");
}

// === Key Tests ===

#[test]
fn supported_keys() {
    assert!(Key::from_vk(0x41).is_supported());
    assert!(Key::from_vk(0x87).is_supported());
    assert!(!Key::NONE.is_supported());
    assert!(!Key::from_vk(0x20).is_supported());
}

#[test]
fn unnamed_key_displays_its_code() {
    assert_eq!(Key::from_vk(0x20).to_string(), "VK 0x20");
}

#[test]
fn key_names_ignore_surrounding_whitespace() {
    assert_eq!(" f5 ".parse::<Key>().unwrap().vk(), 0x74);
}

// === Binding Tests ===

#[test]
fn binding_without_modifiers_is_just_the_key() {
    let binding = HotkeyBinding::new(Modifiers::empty(), "F5".parse().unwrap());
    assert_eq!(binding.to_string(), "F5");
}

#[test]
fn binding_rejects_unknown_key() {
    assert!(HotkeyBinding::from_selections(["Alt", "None", "None"], "Enter").is_err());
}

// === Geometry Tests ===

#[test]
fn rect_size() {
    let rect = Rect::new(10, 20, 110, 70);
    assert_eq!(rect.width(), 100);
    assert_eq!(rect.height(), 50);
    assert!(!rect.is_empty());
}

#[test]
fn rect_with_negative_origin() {
    // Monitors left of the primary have negative coordinates
    let rect = Rect::new(-1920, 0, 0, 1080);
    assert!(rect.contains(Point::new(-1, 500)));
    assert!(!rect.contains(Point::new(0, 500)));
}

#[test]
fn inverted_rect_is_empty() {
    let rect = Rect::new(50, 50, 10, 10);
    assert!(rect.is_empty());
    assert!(!rect.contains(Point::new(30, 30)));
}

// === TrackedWindow Tests ===

#[test]
fn new_window_has_empty_rect() {
    let w = TrackedWindow::new(WindowHandle(1), "A", 7, "C:\\a.exe", false);
    assert_eq!(w.last_known_rect, Rect::default());
    assert!(!w.is_visible());
    assert_eq!(w.visibility_text(), "\u{274C}");
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let mut w = TrackedWindow::new(WindowHandle(1), "A", 7, "C:\\a.exe", true);
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    let id = w.subscribe(move |_| c.set(c.get() + 1));

    w.set_visible(false);
    assert!(w.unsubscribe(id));
    w.set_visible(true);
    assert_eq!(calls.get(), 1);
}

// === TriggerMode Tests ===

#[test]
fn trigger_modes_have_names() {
    for mode in TriggerMode::ALL {
        assert!(!mode.to_string().is_empty());
    }
}
