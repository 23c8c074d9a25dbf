//! Interaction state shared by the DOM trackers and the per-frame scene animator.
//!
//! The store is constructed once at the application root and handed to its
//! consumers as a [`SharedStore`]. Every numeric field is clamped when it is
//! written, so readers never observe out-of-range values. Each setter notifies
//! all current subscribers synchronously with the new state.

use crate::constants::{FLASHLIGHT_OPACITY, FLASHLIGHT_RADIUS, FLASHLIGHT_SHARPNESS};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration of the circular reveal mask drawn over the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flashlight {
    pub enabled: bool,
    /// Mask radius in CSS pixels.
    pub radius: f32,
    pub opacity: f32,
    /// 0 = soft edge across the whole radius, 1 = hard edge.
    pub sharpness: f32,
}

impl Default for Flashlight {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: FLASHLIGHT_RADIUS,
            opacity: FLASHLIGHT_OPACITY,
            sharpness: FLASHLIGHT_SHARPNESS,
        }
    }
}

/// Partial flashlight update; `None` fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlashlightPatch {
    pub enabled: Option<bool>,
    pub radius: Option<f32>,
    pub opacity: Option<f32>,
    pub sharpness: Option<f32>,
}

impl FlashlightPatch {
    pub fn merge_onto(self, base: Flashlight) -> Flashlight {
        Flashlight {
            enabled: self.enabled.unwrap_or(base.enabled),
            radius: self.radius.unwrap_or(base.radius),
            opacity: self.opacity.unwrap_or(base.opacity),
            sharpness: self.sharpness.unwrap_or(base.sharpness),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VaultState {
    /// Normalized pointer position, each axis in [-1, 1].
    pub pointer: Vec2,
    /// How far the page has scrolled through the hero track, in [0, 1].
    pub scroll_progress: f32,
    /// Door-opening parameter derived from `scroll_progress`, in [0, 1].
    pub animation_offset: f32,
    pub is_animating: bool,
    pub flashlight: Flashlight,
}

impl Default for VaultState {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            scroll_progress: 0.0,
            animation_offset: 0.0,
            is_animating: false,
            flashlight: Flashlight::default(),
        }
    }
}

/// Maps scroll progress to the door animation offset.
///
/// Currently a direct pass-through. This is the single place to change the
/// door-animation curve without touching callers.
#[inline]
pub fn animation_offset_for(progress: f32) -> f32 {
    progress
}

#[inline]
fn clamp_or(v: f32, lo: f32, hi: f32, fallback: f32) -> f32 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(lo, hi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&VaultState)>;

pub struct VaultStore {
    state: VaultState,
    listeners: SmallVec<[(SubscriptionId, Listener); 4]>,
    next_id: u64,
}

/// Handle used to inject the store into trackers and the frame loop.
pub type SharedStore = Rc<RefCell<VaultStore>>;

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultStore {
    pub fn new() -> Self {
        Self {
            state: VaultState::default(),
            listeners: SmallVec::new(),
            next_id: 0,
        }
    }

    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    #[inline]
    pub fn state(&self) -> &VaultState {
        &self.state
    }

    #[inline]
    pub fn snapshot(&self) -> VaultState {
        self.state
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.state.pointer
    }

    #[inline]
    pub fn scroll_progress(&self) -> f32 {
        self.state.scroll_progress
    }

    #[inline]
    pub fn animation_offset(&self) -> f32 {
        self.state.animation_offset
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    #[inline]
    pub fn flashlight(&self) -> Flashlight {
        self.state.flashlight
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.state.pointer = Vec2::new(clamp_or(x, -1.0, 1.0, 0.0), clamp_or(y, -1.0, 1.0, 0.0));
        self.notify();
    }

    pub fn set_scroll_progress(&mut self, progress: f32) {
        let p = clamp_or(progress, 0.0, 1.0, 0.0);
        self.state.scroll_progress = p;
        self.state.animation_offset = animation_offset_for(p).clamp(0.0, 1.0);
        self.state.is_animating = p > 0.0 && p < 1.0;
        self.notify();
    }

    /// Overrides the door offset directly, bypassing the scroll mapping.
    pub fn set_animation_offset(&mut self, offset: f32) {
        self.state.animation_offset = clamp_or(offset, 0.0, 1.0, 0.0);
        self.notify();
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.state.is_animating = animating;
        self.notify();
    }

    pub fn set_flashlight(&mut self, patch: FlashlightPatch) {
        self.state.flashlight = patch.merge_onto(self.state.flashlight);
        self.notify();
    }

    pub fn reset(&mut self) {
        self.state = VaultState::default();
        self.notify();
    }

    /// Registers a listener called after every state change.
    ///
    /// Listeners run while the store is mutably borrowed; they must not
    /// borrow the same [`SharedStore`] again.
    pub fn subscribe(&mut self, listener: impl FnMut(&VaultState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_inputs_fall_back_to_defaults() {
        let mut store = VaultStore::new();
        store.set_pointer(f32::NAN, 0.5);
        assert_eq!(store.pointer(), Vec2::new(0.0, 0.5));
        store.set_scroll_progress(f32::NAN);
        assert_eq!(store.scroll_progress(), 0.0);
        assert!(!store.is_animating());
    }

    #[test]
    fn infinite_inputs_clamp_to_bounds() {
        let mut store = VaultStore::new();
        store.set_pointer(f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(store.pointer(), Vec2::new(1.0, -1.0));
        store.set_scroll_progress(f32::INFINITY);
        assert_eq!(store.scroll_progress(), 1.0);
    }

    #[test]
    fn flashlight_patch_keeps_unset_fields() {
        let base = Flashlight::default();
        let merged = FlashlightPatch {
            radius: Some(120.0),
            ..Default::default()
        }
        .merge_onto(base);
        assert_eq!(merged.radius, 120.0);
        assert_eq!(merged.opacity, base.opacity);
        assert!(merged.enabled);
    }
}
