//! Debug overlays drawn through any [`Renderer`]: reference grid, bounding
//! box and a small axis gizmo.

use crate::color::Color;
use crate::render::Renderer;
use glam::Vec3;

/// Red/green/blue X/Y/Z axes starting at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGizmo {
    pub origin: Vec3,
    pub length: f32,
}

impl Default for AxisGizmo {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-3.0, -3.0, 3.0),
            length: 1.0,
        }
    }
}

impl AxisGizmo {
    /// End point, color and label of each axis.
    pub fn axes(&self) -> [(Vec3, Color, &'static str); 3] {
        let o = self.origin;
        let l = self.length;
        [
            (o + Vec3::X * l, Color::RED, "X"),
            (o + Vec3::Y * l, Color::GREEN, "Y"),
            (o + Vec3::Z * l, Color::BLUE, "Z"),
        ]
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for (end, color, _) in self.axes() {
            renderer.draw_line_3d(self.origin, end, color);
        }
    }
}

/// Square grid on the XZ plane centered at the origin, `slices` cells across.
/// The two center lines are drawn darker.
pub fn draw_grid<R: Renderer + ?Sized>(renderer: &mut R, slices: u32, spacing: f32) {
    let half = (slices / 2) as i32;
    let extent = half as f32 * spacing;
    for i in -half..=half {
        let offset = i as f32 * spacing;
        let color = if i == 0 { Color::GRAY } else { Color::LIGHTGRAY };
        renderer.draw_line_3d(
            Vec3::new(offset, 0.0, -extent),
            Vec3::new(offset, 0.0, extent),
            color,
        );
        renderer.draw_line_3d(
            Vec3::new(-extent, 0.0, offset),
            Vec3::new(extent, 0.0, offset),
            color,
        );
    }
}

/// Twelve edges of the axis-aligned box spanning `min`..`max`.
pub fn draw_bounding_box<R: Renderer + ?Sized>(renderer: &mut R, min: Vec3, max: Vec3, color: Color) {
    let corner = |x: bool, y: bool, z: bool| {
        Vec3::new(
            if x { max.x } else { min.x },
            if y { max.y } else { min.y },
            if z { max.z } else { min.z },
        )
    };
    for a in [false, true] {
        for b in [false, true] {
            renderer.draw_line_3d(corner(false, a, b), corner(true, a, b), color);
            renderer.draw_line_3d(corner(a, false, b), corner(a, true, b), color);
            renderer.draw_line_3d(corner(a, b, false), corner(a, b, true), color);
        }
    }
}
