use sphereanim_core::OrbitAxis;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::constants::{DOLLY_STEP, ORBIT_STEP_DEG};

/// What a key event asks the front-end to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Orbit { axis: OrbitAxis, degrees: f32 },
    Dolly(f32),
    ResetCamera,
    ToggleGrid,
    ToggleBox,
}

/// Map a physical key event to an action.
///
/// Camera motion keys act on the first press and on every auto-repeat, so
/// holding a key keeps the camera moving. Toggles ignore repeats. The reset
/// key matches the physical `Y` position (the `Z` key on a German layout) and
/// fires on release.
#[inline]
pub fn action_for_key(code: KeyCode, state: ElementState, repeat: bool) -> Option<KeyAction> {
    let pressed = state == ElementState::Pressed;
    match code {
        KeyCode::ArrowLeft if pressed => Some(KeyAction::Orbit {
            axis: OrbitAxis::Horizontal,
            degrees: -ORBIT_STEP_DEG,
        }),
        KeyCode::ArrowRight if pressed => Some(KeyAction::Orbit {
            axis: OrbitAxis::Horizontal,
            degrees: ORBIT_STEP_DEG,
        }),
        KeyCode::ArrowDown if pressed => Some(KeyAction::Orbit {
            axis: OrbitAxis::Vertical,
            degrees: -ORBIT_STEP_DEG,
        }),
        KeyCode::ArrowUp if pressed => Some(KeyAction::Orbit {
            axis: OrbitAxis::Vertical,
            degrees: ORBIT_STEP_DEG,
        }),
        KeyCode::PageDown if pressed => Some(KeyAction::Dolly(-DOLLY_STEP)),
        KeyCode::PageUp if pressed => Some(KeyAction::Dolly(DOLLY_STEP)),
        KeyCode::KeyY if !pressed => Some(KeyAction::ResetCamera),
        KeyCode::KeyG if pressed && !repeat => Some(KeyAction::ToggleGrid),
        KeyCode::KeyB if pressed && !repeat => Some(KeyAction::ToggleBox),
        _ => None,
    }
}
