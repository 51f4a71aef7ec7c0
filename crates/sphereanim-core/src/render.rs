//! Drawing seam between the simulation and whatever puts pixels on screen.
//!
//! The scene and the debug helpers only ever talk to [`Renderer`]; the
//! native front-end batches these calls into GPU vertex buffers, tests record
//! them.
//!
//! Text is not part of this trait. The native front-end has no glyph
//! rasterizer, so its FPS and camera readout go to the window title instead.

use crate::color::Color;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Opaque,
    Alpha,
}

pub trait Renderer {
    fn draw_line_3d(&mut self, start: Vec3, end: Vec3, color: Color);

    /// Wireframe sphere with `rings` latitude bands and `slices` meridians.
    fn draw_sphere_wires(&mut self, center: Vec3, radius: f32, rings: u32, slices: u32, color: Color);

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color);

    /// Axis-aligned solid box of full extents `size`.
    fn draw_cube(&mut self, center: Vec3, size: Vec3, color: Color);

    /// Applies to every primitive issued until the next call.
    fn set_blend_mode(&mut self, mode: BlendMode);
}
