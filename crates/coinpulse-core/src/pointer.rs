use glam::Vec2;

/// Axis-aligned client rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

// ---------------- Pointer normalization ----------------

/// Map a client-space pointer position to [-1, 1] per axis around the
/// region center. Values outside the region fall outside that range; the
/// store clamps on write. A degenerate region maps everything to the center.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, region: &ClientRect) -> Vec2 {
    if region.width <= 0.0 || region.height <= 0.0 {
        return Vec2::ZERO;
    }
    let c = region.center();
    Vec2::new(
        2.0 * (client_x - c.x) / region.width,
        2.0 * (client_y - c.y) / region.height,
    )
}

/// Map a normalized pointer into percentage coordinates of its container,
/// (0, 0) being the top-left corner.
#[inline]
pub fn pointer_to_percent(pointer: Vec2) -> Vec2 {
    let p = pointer.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    (p + Vec2::ONE) * 50.0
}
