//! Scene-side logic for the vault hero: camera parallax, door timeline,
//! backdrop grid sizing and the flashlight mask.
//!
//! Everything here is pure or mutates plain data (`SceneNode`); the web
//! renderer reads the results once per frame.

pub mod camera;
pub mod flashlight;
pub mod grid;
pub mod model;
pub mod vault;

pub use camera::*;
pub use flashlight::*;
pub use grid::*;
pub use model::*;
pub use vault::*;

use glam::Vec3;

/// One exponential-smoothing step: move `alpha` of the remaining distance.
#[inline]
pub fn lerp(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

#[inline]
pub fn lerp_vec3(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}
