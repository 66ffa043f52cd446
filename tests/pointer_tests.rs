//! Tests for the low-level mouse hook and gesture derivation.

mod support;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use support::{pointer_log, send, FakePointerBackend};
use wintoggle::error::HookError;
use wintoggle::input::{PointerEventHook, RawPointerEvent};
use wintoggle::model::Point;

use RawPointerEvent::{LeftDown, LeftUp, MiddleDown, MiddleUp, RightDown, RightUp};

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    (count, move || c.set(c.get() + 1))
}

/// Reference for "both buttons have been pressed since the last chord".
fn expected_chords(events: &[RawPointerEvent]) -> u32 {
    let (mut left, mut right, mut fired) = (false, false, 0);
    for event in events {
        match event {
            LeftDown => left = true,
            LeftUp => left = false,
            RightDown => right = true,
            RightUp => right = false,
            _ => {}
        }
        if left && right {
            fired += 1;
            left = false;
            right = false;
        }
    }
    fired
}

// === Chord detection ===

#[test]
fn chord_fires_once_when_both_buttons_go_down() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let (count, cb) = counter();
    hook.on_simultaneous_chord(cb);

    send(&log, LeftDown);
    assert_eq!(count.get(), 0);
    send(&log, RightDown);
    assert_eq!(count.get(), 1);
}

#[test]
fn chord_is_edge_triggered() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let (count, cb) = counter();
    hook.on_simultaneous_chord(cb);

    send(&log, LeftDown);
    send(&log, RightDown);
    // Left is still physically held, but the state was reset: re-pressing
    // right alone is not a new chord
    send(&log, RightUp);
    send(&log, RightDown);
    assert_eq!(count.get(), 1);

    send(&log, LeftUp);
    send(&log, RightUp);
    send(&log, RightDown);
    send(&log, LeftDown);
    assert_eq!(count.get(), 2);
}

#[test]
fn chord_count_matches_reference_for_all_short_sequences() {
    let alphabet = [LeftDown, LeftUp, RightDown, RightUp];
    // Every sequence of length 5 over the four button transitions
    for n in 0..alphabet.len().pow(5) {
        let mut events = Vec::new();
        let mut k = n;
        for _ in 0..5 {
            events.push(alphabet[k % alphabet.len()]);
            k /= alphabet.len();
        }

        let log = pointer_log();
        let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
        let (count, cb) = counter();
        hook.on_simultaneous_chord(cb);
        for event in &events {
            send(&log, *event);
        }
        assert_eq!(count.get(), expected_chords(&events), "sequence {:?}", events);
    }
}

#[test]
fn releasing_one_button_cancels_a_pending_chord() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let (count, cb) = counter();
    hook.on_simultaneous_chord(cb);

    send(&log, LeftDown);
    send(&log, LeftUp);
    send(&log, RightDown);
    assert_eq!(count.get(), 0);
}

// === Other signals ===

#[test]
fn middle_button_down_fires_only_on_press() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let (count, cb) = counter();
    hook.on_middle_button_down(cb);

    send(&log, MiddleDown);
    send(&log, MiddleUp);
    send(&log, RawPointerEvent::Other);
    assert_eq!(count.get(), 1);
}

#[test]
fn every_move_is_reported_with_coordinates() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    hook.on_pointer_moved(move |pt| sink.borrow_mut().push(pt));

    send(&log, RawPointerEvent::Move(Point::new(1, 2)));
    send(&log, LeftDown);
    send(&log, RawPointerEvent::Move(Point::new(1, 2)));
    send(&log, RawPointerEvent::Move(Point::new(-5, 40)));

    assert_eq!(
        *seen.borrow(),
        vec![Point::new(1, 2), Point::new(1, 2), Point::new(-5, 40)]
    );
}

#[test]
fn unsubscribe_stops_delivery() {
    let log = pointer_log();
    let hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    let (middle, cb) = counter();
    let id = hook.on_middle_button_down(cb);
    let (chords, cb) = counter();
    hook.on_simultaneous_chord(cb);

    send(&log, MiddleDown);
    assert!(hook.unsubscribe(id));
    assert!(!hook.unsubscribe(id));
    send(&log, MiddleDown);
    send(&log, LeftDown);
    send(&log, RightDown);

    assert_eq!(middle.get(), 1);
    assert_eq!(chords.get(), 1);
}

// === Lifetime ===

#[test]
fn install_failure_is_an_error() {
    let log = pointer_log();
    log.borrow_mut().fail_install = true;
    let result = PointerEventHook::install(FakePointerBackend::new(&log));
    assert!(matches!(result, Err(HookError::InstallFailed(_))));
    assert_eq!(log.borrow().uninstalls, 0);
}

#[test]
fn dispose_uninstalls_exactly_once() {
    let log = pointer_log();
    let mut hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    assert!(hook.is_installed());

    hook.dispose();
    hook.dispose();
    assert!(!hook.is_installed());
    drop(hook);

    assert_eq!(log.borrow().installs, 1);
    assert_eq!(log.borrow().uninstalls, 1);
}

#[test]
fn drop_uninstalls() {
    let log = pointer_log();
    {
        let _hook = PointerEventHook::install(FakePointerBackend::new(&log)).unwrap();
    }
    assert_eq!(log.borrow().uninstalls, 1);
}

#[test]
fn shared_owner_uninstalls_on_last_release() {
    let log = pointer_log();
    let hook = Rc::new(PointerEventHook::install(FakePointerBackend::new(&log)).unwrap());
    let consumer = Rc::clone(&hook);
    drop(hook);
    assert_eq!(log.borrow().uninstalls, 0);
    drop(consumer);
    assert_eq!(log.borrow().uninstalls, 1);
}
