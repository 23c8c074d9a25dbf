use super::lerp_vec3;
use crate::constants::{
    CAMERA_BASE_Z, CAMERA_FOV_DEG, CAMERA_PARALLAX_X, CAMERA_PARALLAX_Y, CAMERA_PORTRAIT_SCALE,
    CAMERA_SMOOTHING,
};
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Hero camera looking at the origin from `eye`.
    pub fn hero(eye: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Eye position the camera eases toward for a pointer and viewport aspect.
///
/// Portrait viewports push the camera back so the whole vault stays in frame.
#[inline]
pub fn camera_target(pointer: Vec2, aspect: f32) -> Vec3 {
    let aspect = sanitize_aspect(aspect);
    let z = if aspect < 1.0 {
        CAMERA_BASE_Z + (1.0 / aspect) * CAMERA_PORTRAIT_SCALE
    } else {
        CAMERA_BASE_Z
    };
    Vec3::new(pointer.x * CAMERA_PARALLAX_X, pointer.y * CAMERA_PARALLAX_Y, z)
}

/// Smoothed camera eye; call [`CameraRig::update`] once per rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_BASE_Z),
        }
    }
}

impl CameraRig {
    pub fn update(&mut self, pointer: Vec2, aspect: f32) -> Vec3 {
        self.eye = lerp_vec3(self.eye, camera_target(pointer, aspect), CAMERA_SMOOTHING);
        self.eye
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera::hero(self.eye, aspect)
    }
}
