//! Viewer camera shared by the front-end and the HUD.
//!
//! The camera stays platform-free: the front-end turns it into a
//! view-projection matrix for the GPU. [`Camera::world_to_screen`] maps a world
//! point to window pixels for anything that draws screen-space text.

use crate::constants::CUBE_ZMAX;
use glam::{Mat4, Quat, Vec2, Vec3, Vec4Swizzles};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    Perspective,
    /// `fovy_degrees` is reinterpreted as the visible height in world units.
    Orthographic,
}

/// World axis the camera position is swung around, through the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitAxis {
    /// Left/right swing about world Y.
    Horizontal,
    /// Up/down swing about world X.
    Vertical,
}

impl OrbitAxis {
    fn rotation_axis(self) -> Vec3 {
        match self {
            OrbitAxis::Horizontal => Vec3::Y,
            OrbitAxis::Vertical => Vec3::X,
        }
    }
}

/// Right-handed camera description.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_degrees: f32,
    pub projection: Projection,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    /// Looking at the origin from behind the far depth face.
    fn default() -> Self {
        Self {
            position: Vec3::new(-2.0, 3.0, -5.0 * CUBE_ZMAX),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_degrees: 30.0,
            projection: Projection::Perspective,
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(
                self.fovy_degrees.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic => {
                let top = self.fovy_degrees * 0.5;
                let right = top * aspect;
                Mat4::orthographic_rh(-right, right, -top, top, self.znear, self.zfar)
            }
        }
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Pixel position of `point` on a `width` x `height` screen, origin top
    /// left. `None` when the point is behind the camera.
    pub fn world_to_screen(&self, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let aspect = width / height.max(1.0);
        let clip = self.view_projection(aspect) * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xy() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }

    /// Swing the position around the target, keeping the distance to it.
    pub fn orbit(&mut self, axis: OrbitAxis, degrees: f32) {
        let rotation = Quat::from_axis_angle(axis.rotation_axis(), degrees.to_radians());
        let to_target = rotation * (self.target - self.position);
        self.position = self.target - to_target;
    }

    /// Move the camera along world Z without touching the target.
    pub fn dolly_z(&mut self, delta: f32) {
        self.position.z += delta;
    }
}
