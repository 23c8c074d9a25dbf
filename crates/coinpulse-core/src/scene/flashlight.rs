use crate::pointer::pointer_to_percent;
use crate::store::Flashlight;
use glam::Vec2;

/// CSS `mask-image` value revealing a circle around the pointer.
///
/// The inner `radius * sharpness` is fully revealed at `opacity`; the rest of
/// the radius fades out. A disabled flashlight yields `none`.
pub fn flashlight_mask(pointer: Vec2, flashlight: &Flashlight) -> String {
    if !flashlight.enabled {
        return "none".to_string();
    }
    let at = pointer_to_percent(pointer);
    let radius = flashlight.radius.max(0.0);
    let inner = radius * flashlight.sharpness.clamp(0.0, 1.0);
    let alpha = flashlight.opacity.clamp(0.0, 1.0);
    format!(
        "radial-gradient(circle {radius:.1}px at {:.2}% {:.2}%, rgba(0,0,0,{alpha:.3}) 0px, rgba(0,0,0,{alpha:.3}) {inner:.1}px, rgba(0,0,0,0) {radius:.1}px)",
        at.x, at.y
    )
}
