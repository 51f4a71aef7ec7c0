// Host-side tests for the HUD text and frame pacing helpers.
// The front-end is a binary crate, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod overlay {
    include!("../src/overlay.rs");
}
mod pacing {
    include!("../src/pacing.rs");
}

use glam::Vec3;
use instant::Instant;
use overlay::*;
use pacing::FramePacer;
use std::time::Duration;

#[test]
fn fps_counter_reports_after_window() {
    let mut fps = FpsCounter::new(Duration::from_millis(500));
    let dt = Duration::from_millis(20);
    let mut refreshed = false;
    for _ in 0..24 {
        refreshed = fps.tick(dt);
        assert!(!refreshed);
    }
    assert_eq!(fps.fps(), 0);
    refreshed |= fps.tick(dt);
    assert!(refreshed);
    assert_eq!(fps.fps(), 50);
}

#[test]
fn fps_counter_restarts_window_after_refresh() {
    let mut fps = FpsCounter::new(Duration::from_millis(100));
    assert!(fps.tick(Duration::from_millis(100)));
    assert_eq!(fps.fps(), 10);
    assert!(!fps.tick(Duration::from_millis(50)));
    assert!(fps.tick(Duration::from_millis(50)));
    assert_eq!(fps.fps(), 20);
}

#[test]
fn camera_readout_formats_two_decimals() {
    assert_eq!(
        camera_readout(Vec3::new(-2.0, 3.0, -50.0)),
        "X:-2.00 Y:3.00 Z:-50.00"
    );
}

#[test]
fn hud_title_lists_active_overlays() {
    let base = hud_title("Spheres", 60, Vec3::ZERO, false, false);
    assert_eq!(base, "Spheres • 60 FPS • X:0.00 Y:0.00 Z:0.00");
    let both = hud_title("Spheres", 59, Vec3::ZERO, true, true);
    assert!(both.ends_with(" • grid • box"));
    let grid_only = hud_title("Spheres", 59, Vec3::ZERO, true, false);
    assert!(grid_only.ends_with(" • grid"));
}

#[test]
fn pacer_is_due_immediately_then_waits_one_interval() {
    let t0 = Instant::now();
    let mut pacer = FramePacer::new(60, t0);
    assert!(pacer.due(t0));
    pacer.advance(t0);
    assert!(!pacer.due(t0));
    assert_eq!(pacer.deadline(), t0 + pacer.interval());
    assert!(pacer.due(t0 + pacer.interval()));
}

#[test]
fn pacer_skips_missed_frames() {
    let t0 = Instant::now();
    let mut pacer = FramePacer::new(60, t0);
    let late = t0 + Duration::from_millis(500);
    pacer.advance(late);
    assert_eq!(pacer.deadline(), late + pacer.interval());
}

#[test]
fn pacer_interval_matches_target_rate() {
    let pacer = FramePacer::new(50, Instant::now());
    assert_eq!(pacer.interval(), Duration::from_millis(20));
}
