// Host-side tests for primitive batching.
// The front-end is a binary crate, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod batch {
    include!("../src/render/batch.rs");
}

use batch::*;
use glam::Vec3;
use sphereanim_core::*;

fn pos(v: &Vertex) -> Vec3 {
    Vec3::from_array(v.pos)
}

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 16);
}

#[test]
fn line_emits_two_vertices() {
    let mut b = FrameBatch::default();
    b.draw_line_3d(Vec3::ZERO, Vec3::X, Color::RED);
    assert_eq!(b.lines.len(), 2);
    assert_eq!(b.lines[1].pos, [1.0, 0.0, 0.0]);
    assert_eq!(b.lines[0].color, [230, 41, 55, 255]);
}

#[test]
fn wire_sphere_segments_lie_on_the_surface() {
    let mut b = FrameBatch::default();
    let center = Vec3::new(1.0, -2.0, 3.0);
    b.draw_sphere_wires(center, 0.5, WIRE_COUNT, WIRE_COUNT, Color::BLUE);
    // rings latitude circles plus slices pole-to-pole meridians
    let rings = WIRE_COUNT as usize;
    let slices = WIRE_COUNT as usize;
    let segments = rings * slices + slices * (rings + 1);
    assert_eq!(b.lines.len(), 2 * segments);
    for v in &b.lines {
        assert!((pos(v).distance(center) - 0.5).abs() < 1e-4);
    }
    assert!(b.solid.is_empty() && b.translucent.is_empty());
}

#[test]
fn cube_goes_to_the_active_blend_bucket() {
    let mut b = FrameBatch::default();
    b.draw_cube(Vec3::ZERO, Vec3::ONE, Color::BLACK);
    assert_eq!(b.solid.len(), 36);
    b.set_blend_mode(BlendMode::Alpha);
    b.draw_cube(Vec3::ZERO, Vec3::new(40.0, 40.0, 0.25), WALL_COLOR);
    assert_eq!(b.translucent.len(), 36);
    assert!(b.translucent.iter().all(|v| v.color[3] == 200));
    for v in &b.translucent {
        let p = pos(v);
        assert_eq!(p.x.abs(), 20.0);
        assert_eq!(p.z.abs(), 0.125);
    }
}

#[test]
fn solid_sphere_stays_on_radius() {
    let mut b = FrameBatch::default();
    b.draw_sphere(Vec3::ZERO, 2.0, Color::ORANGE);
    assert!(!b.solid.is_empty());
    assert_eq!(b.solid.len() % 3, 0);
    assert!(b.solid.iter().all(|v| (pos(v).length() - 2.0).abs() < 1e-4));
}

#[test]
fn clear_resets_geometry_and_blend_mode() {
    let mut b = FrameBatch::default();
    b.set_blend_mode(BlendMode::Alpha);
    b.draw_cube(Vec3::ZERO, Vec3::ONE, Color::BLACK);
    b.clear();
    assert_eq!(b.vertex_count(), 0);
    b.draw_cube(Vec3::ZERO, Vec3::ONE, Color::BLACK);
    assert_eq!(b.solid.len(), 36);
}

#[test]
fn scene_draw_fills_lines_and_wall() {
    let scene = Scene::new(SPHERE_COUNT, CONNECTION_THRESHOLD);
    let mut b = FrameBatch::default();
    scene.draw(&mut b);
    assert!(b.lines.len() >= SPHERE_COUNT * 2);
    assert_eq!(b.translucent.len(), 36);
    assert!(b.solid.is_empty());
}
