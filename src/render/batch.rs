// CPU-side primitive batching: turns `Renderer` calls into line and
// triangle vertex lists ready for upload.

use glam::Vec3;
use sphereanim_core::{BlendMode, Color, Renderer};
use std::f32::consts::{PI, TAU};

const SOLID_SPHERE_RINGS: u32 = 16;
const SOLID_SPHERE_SLICES: u32 = 16;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [u8; 4],
}

impl Vertex {
    #[inline]
    fn new(pos: Vec3, color: Color) -> Self {
        Self {
            pos: pos.to_array(),
            color: color.to_array(),
        }
    }
}

/// One frame's worth of geometry, split by pipeline.
#[derive(Default)]
pub struct FrameBatch {
    /// Line-list vertices, two per segment.
    pub lines: Vec<Vertex>,
    /// Opaque triangle-list vertices.
    pub solid: Vec<Vertex>,
    /// Alpha-blended triangle-list vertices, drawn last.
    pub translucent: Vec<Vertex>,
    blend: BlendMode,
}

impl FrameBatch {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.solid.clear();
        self.translucent.clear();
        self.blend = BlendMode::Opaque;
    }

    pub fn vertex_count(&self) -> usize {
        self.lines.len() + self.solid.len() + self.translucent.len()
    }

    fn triangles(&mut self) -> &mut Vec<Vertex> {
        match self.blend {
            BlendMode::Opaque => &mut self.solid,
            BlendMode::Alpha => &mut self.translucent,
        }
    }

    fn segment(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.lines.push(Vertex::new(a, color));
        self.lines.push(Vertex::new(b, color));
    }
}

/// Point on a latitude/longitude grid; `lat` runs pole to pole over
/// `lat_steps`, `lon` around over `lon_steps`.
fn sphere_point(center: Vec3, radius: f32, lat: u32, lat_steps: u32, lon: u32, lon_steps: u32) -> Vec3 {
    let phi = PI * lat as f32 / lat_steps as f32;
    let theta = TAU * lon as f32 / lon_steps as f32;
    center
        + radius
            * Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            )
}

impl Renderer for FrameBatch {
    fn draw_line_3d(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.segment(start, end, color);
    }

    fn draw_sphere_wires(&mut self, center: Vec3, radius: f32, rings: u32, slices: u32, color: Color) {
        let lat_steps = rings + 1;
        let lon_steps = slices.max(3);
        for lat in 1..lat_steps {
            for lon in 0..lon_steps {
                let a = sphere_point(center, radius, lat, lat_steps, lon, lon_steps);
                let b = sphere_point(center, radius, lat, lat_steps, lon + 1, lon_steps);
                self.segment(a, b, color);
            }
        }
        for lon in 0..lon_steps {
            for lat in 0..lat_steps {
                let a = sphere_point(center, radius, lat, lat_steps, lon, lon_steps);
                let b = sphere_point(center, radius, lat + 1, lat_steps, lon, lon_steps);
                self.segment(a, b, color);
            }
        }
    }

    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        let (lat_steps, lon_steps) = (SOLID_SPHERE_RINGS, SOLID_SPHERE_SLICES);
        let tris = self.triangles();
        for lat in 0..lat_steps {
            for lon in 0..lon_steps {
                let p = |la, lo| {
                    Vertex::new(sphere_point(center, radius, la, lat_steps, lo, lon_steps), color)
                };
                let (a, b) = (p(lat, lon), p(lat + 1, lon));
                let (c, d) = (p(lat + 1, lon + 1), p(lat, lon + 1));
                tris.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
    }

    fn draw_cube(&mut self, center: Vec3, size: Vec3, color: Color) {
        let h = size * 0.5;
        let corner = |x: f32, y: f32, z: f32| Vertex::new(center + h * Vec3::new(x, y, z), color);
        let v = [
            corner(-1.0, -1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
            corner(-1.0, -1.0, 1.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
        ];
        const FACES: [[usize; 4]; 6] = [
            [4, 5, 6, 7], // +z
            [1, 0, 3, 2], // -z
            [5, 1, 2, 6], // +x
            [0, 4, 7, 3], // -x
            [7, 6, 2, 3], // +y
            [0, 1, 5, 4], // -y
        ];
        let tris = self.triangles();
        for [a, b, c, d] in FACES {
            tris.extend_from_slice(&[v[a], v[b], v[c], v[a], v[c], v[d]]);
        }
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }
}
