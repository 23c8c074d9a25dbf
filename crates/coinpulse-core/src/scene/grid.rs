use crate::constants::{GRID_DEPTH_Z, GRID_MIN_WIDTH, GRID_OVERLAP_PX};

/// Backdrop grid dimensions in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedGrid {
    pub width: f32,
    pub height: f32,
    /// Grid center Y at `GRID_DEPTH_Z`.
    pub y: f32,
    pub z: f32,
}

/// Size the backdrop grid so it ends at the bottom edge of the hero section.
///
/// The canvas extends `GRID_OVERLAP_PX` below the hero; that band is
/// converted to world units at the grid depth and cut from the bottom.
pub fn fitted_grid(camera_z: f32, fovy_radians: f32, aspect: f32, canvas_height_px: f32) -> FittedGrid {
    let distance = (camera_z - GRID_DEPTH_Z).abs();
    let visible_h = 2.0 * (fovy_radians * 0.5).tan() * distance;
    let visible_w = visible_h * if aspect > 0.0 { aspect } else { 1.0 };
    let overlap_world = visible_h * (GRID_OVERLAP_PX / canvas_height_px.max(1.0));
    FittedGrid {
        width: (visible_w * 3.0).max(GRID_MIN_WIDTH),
        height: (visible_h - overlap_world).max(0.1),
        y: overlap_world * 0.5,
        z: GRID_DEPTH_Z,
    }
}
