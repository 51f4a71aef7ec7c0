// Host-side tests for pure input functions.
// The front-end is a binary crate, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::{DOLLY_STEP, ORBIT_STEP_DEG};
use input::*;
use sphereanim_core::OrbitAxis;
use winit::event::ElementState::{Pressed, Released};
use winit::keyboard::KeyCode;

#[test]
fn arrows_orbit_on_press_and_repeat() {
    for repeat in [false, true] {
        assert_eq!(
            action_for_key(KeyCode::ArrowLeft, Pressed, repeat),
            Some(KeyAction::Orbit {
                axis: OrbitAxis::Horizontal,
                degrees: -ORBIT_STEP_DEG
            })
        );
        assert_eq!(
            action_for_key(KeyCode::ArrowUp, Pressed, repeat),
            Some(KeyAction::Orbit {
                axis: OrbitAxis::Vertical,
                degrees: ORBIT_STEP_DEG
            })
        );
    }
}

#[test]
fn arrows_pair_in_opposite_directions() {
    let pairs = [
        (KeyCode::ArrowLeft, KeyCode::ArrowRight),
        (KeyCode::ArrowDown, KeyCode::ArrowUp),
    ];
    for (neg, pos) in pairs {
        match (
            action_for_key(neg, Pressed, false),
            action_for_key(pos, Pressed, false),
        ) {
            (
                Some(KeyAction::Orbit { axis: a, degrees: d1 }),
                Some(KeyAction::Orbit { axis: b, degrees: d2 }),
            ) => {
                assert_eq!(a, b);
                assert_eq!(d1, -d2);
            }
            other => panic!("unexpected mapping {other:?}"),
        }
    }
}

#[test]
fn releases_do_not_move_the_camera() {
    for code in [
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::PageUp,
        KeyCode::PageDown,
    ] {
        assert_eq!(action_for_key(code, Released, false), None);
    }
}

#[test]
fn page_keys_dolly_along_z() {
    assert_eq!(
        action_for_key(KeyCode::PageUp, Pressed, true),
        Some(KeyAction::Dolly(DOLLY_STEP))
    );
    assert_eq!(
        action_for_key(KeyCode::PageDown, Pressed, false),
        Some(KeyAction::Dolly(-DOLLY_STEP))
    );
}

#[test]
fn reset_fires_on_release_of_physical_y() {
    assert_eq!(action_for_key(KeyCode::KeyY, Pressed, false), None);
    assert_eq!(
        action_for_key(KeyCode::KeyY, Released, false),
        Some(KeyAction::ResetCamera)
    );
    assert_eq!(action_for_key(KeyCode::KeyZ, Released, false), None);
}

#[test]
fn toggles_ignore_auto_repeat() {
    assert_eq!(
        action_for_key(KeyCode::KeyG, Pressed, false),
        Some(KeyAction::ToggleGrid)
    );
    assert_eq!(action_for_key(KeyCode::KeyG, Pressed, true), None);
    assert_eq!(
        action_for_key(KeyCode::KeyB, Pressed, false),
        Some(KeyAction::ToggleBox)
    );
    assert_eq!(action_for_key(KeyCode::KeyB, Pressed, true), None);
    assert_eq!(action_for_key(KeyCode::KeyB, Released, false), None);
}

#[test]
fn unmapped_keys_are_ignored() {
    assert_eq!(action_for_key(KeyCode::KeyQ, Pressed, false), None);
    assert_eq!(action_for_key(KeyCode::Space, Pressed, false), None);
}
