// Host-side tests for the interaction store.

use coinpulse_core::{Flashlight, FlashlightPatch, VaultState, VaultStore};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

fn fresh() -> VaultStore {
    let mut store = VaultStore::new();
    store.reset();
    store
}

#[test]
fn initial_state_matches_defaults() {
    let store = fresh();
    assert_eq!(store.animation_offset(), 0.0);
    assert_eq!(store.pointer(), Vec2::ZERO);
    assert_eq!(store.scroll_progress(), 0.0);
    assert!(!store.is_animating());
    assert_eq!(
        store.flashlight(),
        Flashlight {
            enabled: true,
            radius: 300.0,
            opacity: 0.9,
            sharpness: 0.5,
        }
    );
}

#[test]
fn sets_pointer_position() {
    let mut store = fresh();
    store.set_pointer(0.5, -0.5);
    assert_eq!(store.pointer(), Vec2::new(0.5, -0.5));
}

#[test]
fn clamps_pointer_position() {
    let mut store = fresh();
    store.set_pointer(2.0, -2.0);
    assert_eq!(store.pointer(), Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_axes_clamp_independently() {
    let mut store = fresh();
    for &(x, y) in &[(-3.0, 0.25), (0.75, 9.0), (-1.0, 1.0), (0.0, -0.0)] {
        store.set_pointer(x, y);
        let p = store.pointer();
        assert_eq!(p.x, f32::clamp(x, -1.0, 1.0));
        assert_eq!(p.y, f32::clamp(y, -1.0, 1.0));
    }
}

#[test]
fn scroll_progress_updates_offset_and_animating() {
    let mut store = fresh();
    store.set_scroll_progress(0.5);
    assert_eq!(store.scroll_progress(), 0.5);
    assert_eq!(store.animation_offset(), 0.5);
    assert!(store.is_animating());
}

#[test]
fn clamps_scroll_progress() {
    let mut store = fresh();
    store.set_scroll_progress(1.5);
    assert_eq!(store.scroll_progress(), 1.0);
    assert_eq!(store.animation_offset(), 1.0);
    assert!(!store.is_animating());

    store.set_scroll_progress(-0.25);
    assert_eq!(store.scroll_progress(), 0.0);
    assert_eq!(store.animation_offset(), 0.0);
    assert!(!store.is_animating());
}

#[test]
fn animating_only_strictly_inside_range() {
    let mut store = fresh();
    for &(p, expected) in &[(0.0, false), (0.001, true), (0.999, true), (1.0, false)] {
        store.set_scroll_progress(p);
        assert_eq!(store.is_animating(), expected, "progress {p}");
    }
}

#[test]
fn setters_are_idempotent() {
    let mut store = fresh();
    store.set_scroll_progress(0.4);
    store.set_pointer(0.3, 0.2);
    let once = store.snapshot();
    store.set_scroll_progress(0.4);
    store.set_pointer(0.3, 0.2);
    assert_eq!(store.snapshot(), once);
}

#[test]
fn flashlight_merges_partial_config() {
    let mut store = fresh();
    store.set_flashlight(FlashlightPatch {
        radius: Some(150.0),
        enabled: Some(false),
        ..Default::default()
    });
    let f = store.flashlight();
    assert!(!f.enabled);
    assert_eq!(f.radius, 150.0);
    assert_eq!(f.opacity, 0.9);
    assert_eq!(f.sharpness, 0.5);
}

#[test]
fn flashlight_fields_are_not_clamped() {
    let mut store = fresh();
    store.set_flashlight(FlashlightPatch {
        opacity: Some(1.5),
        ..Default::default()
    });
    assert_eq!(store.flashlight().opacity, 1.5);
}

#[test]
fn manual_offset_is_clamped() {
    let mut store = fresh();
    store.set_animation_offset(3.0);
    assert_eq!(store.animation_offset(), 1.0);
    store.set_animation_offset(-3.0);
    assert_eq!(store.animation_offset(), 0.0);
}

#[test]
fn reset_restores_defaults_from_any_state() {
    let mut store = fresh();
    store.set_pointer(0.9, -0.4);
    store.set_scroll_progress(0.7);
    store.set_animating(false);
    store.set_flashlight(FlashlightPatch {
        radius: Some(10.0),
        sharpness: Some(1.0),
        ..Default::default()
    });
    store.reset();
    assert_eq!(store.snapshot(), VaultState::default());
}

#[test]
fn every_setter_notifies_subscribers() {
    let mut store = fresh();
    let seen: Rc<RefCell<Vec<VaultState>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.borrow_mut().push(*s));

    store.set_pointer(0.1, 0.2);
    store.set_scroll_progress(0.5);
    store.set_animation_offset(0.2);
    store.set_animating(true);
    store.set_flashlight(FlashlightPatch::default());
    store.reset();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[0].pointer, Vec2::new(0.1, 0.2));
    assert_eq!(seen[1].scroll_progress, 0.5);
    assert_eq!(seen[5], VaultState::default());
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut store = fresh();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    let id = store.subscribe(move |_| *c.borrow_mut() += 1);
    assert_eq!(store.subscriber_count(), 1);

    store.set_pointer(0.0, 0.0);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_pointer(0.5, 0.5);

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn shared_handle_is_visible_to_all_holders() {
    let store = VaultStore::shared();
    let tracker_side = store.clone();
    tracker_side.borrow_mut().set_scroll_progress(0.25);
    assert_eq!(store.borrow().scroll_progress(), 0.25);
}
