// Host-side tests for pointer normalization, scroll progress and reveal state.

use coinpulse_core::{
    normalize_pointer, pointer_to_percent, track_scroll_progress, viewport_scroll_progress,
    ClientRect, RevealChange, RevealState, VaultStore,
};
use glam::Vec2;

// Track pinned at page top: its top edge sits at -scrollY.
fn progress_at(scroll_y: f32, viewport_h: f32, track_h: f32) -> Option<f32> {
    track_scroll_progress(-scroll_y, track_h, viewport_h)
}

#[test]
fn pointer_center_maps_to_origin() {
    let rect = ClientRect::new(100.0, 50.0, 800.0, 600.0);
    assert_eq!(normalize_pointer(500.0, 350.0, &rect), Vec2::ZERO);
}

#[test]
fn pointer_edges_map_to_unit_range() {
    let rect = ClientRect::new(100.0, 50.0, 800.0, 600.0);
    assert_eq!(normalize_pointer(100.0, 50.0, &rect), Vec2::new(-1.0, -1.0));
    assert_eq!(normalize_pointer(900.0, 650.0, &rect), Vec2::new(1.0, 1.0));
    assert_eq!(normalize_pointer(700.0, 200.0, &rect), Vec2::new(0.5, -0.5));
}

#[test]
fn pointer_outside_region_is_clamped_by_store() {
    let rect = ClientRect::new(0.0, 0.0, 200.0, 100.0);
    let raw = normalize_pointer(400.0, -100.0, &rect);
    assert_eq!(raw, Vec2::new(3.0, -3.0));

    let mut store = VaultStore::new();
    store.set_pointer(raw.x, raw.y);
    assert_eq!(store.pointer(), Vec2::new(1.0, -1.0));
}

#[test]
fn degenerate_region_maps_to_center() {
    let rect = ClientRect::new(10.0, 10.0, 0.0, 100.0);
    assert_eq!(normalize_pointer(50.0, 50.0, &rect), Vec2::ZERO);
}

#[test]
fn pointer_percent_covers_container() {
    assert_eq!(pointer_to_percent(Vec2::new(-1.0, -1.0)), Vec2::ZERO);
    assert_eq!(pointer_to_percent(Vec2::ZERO), Vec2::splat(50.0));
    assert_eq!(pointer_to_percent(Vec2::new(1.0, 0.5)), Vec2::new(100.0, 75.0));
}

#[test]
fn track_progress_midpoint() {
    // innerHeight 1000, track 2000 => scrollable distance 1000
    assert_eq!(progress_at(500.0, 1000.0, 2000.0), Some(0.5));
}

#[test]
fn track_progress_clamps_to_unit_range() {
    assert_eq!(progress_at(1500.0, 1000.0, 2000.0), Some(1.0));
    assert_eq!(progress_at(-100.0, 1000.0, 2000.0), Some(0.0));
}

#[test]
fn track_not_taller_than_viewport_leaves_store_untouched() {
    let mut store = VaultStore::new();
    store.set_scroll_progress(0.4);
    if let Some(p) = progress_at(300.0, 1000.0, 900.0) {
        store.set_scroll_progress(p);
    }
    assert_eq!(store.scroll_progress(), 0.4);
}

#[test]
fn legacy_viewport_progress_matches_track_for_double_height_track() {
    for &y in &[0.0, 250.0, 500.0, 999.0, 1500.0] {
        assert_eq!(
            viewport_scroll_progress(y, 1000.0),
            progress_at(y, 1000.0, 2000.0).unwrap_or_default()
        );
    }
}

#[test]
fn reveal_enters_once_and_reverses() {
    let mut reveal = RevealState::default();
    assert_eq!(reveal.update(900.0, 1000.0), None);
    assert_eq!(reveal.update(840.0, 1000.0), Some(RevealChange::Enter));
    assert!(reveal.is_revealed());
    assert_eq!(reveal.update(100.0, 1000.0), None);
    assert_eq!(reveal.update(-400.0, 1000.0), None);
    assert_eq!(reveal.update(860.0, 1000.0), Some(RevealChange::Reverse));
    assert!(!reveal.is_revealed());
}

#[test]
fn reveal_ignores_bad_geometry() {
    let mut reveal = RevealState::default();
    assert_eq!(reveal.update(f32::NAN, 1000.0), None);
    assert_eq!(reveal.update(0.0, 0.0), None);
    assert!(!reveal.is_revealed());
}
