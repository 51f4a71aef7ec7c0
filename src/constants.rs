/// Window, pacing and camera-control tuning for the native front-end.
///
/// Simulation constants live in `sphereanim_core::constants`; these only
/// shape how the scene is presented and driven.
// Window
pub const WINDOW_TITLE: &str = "3D Sphere Connections";
pub const WINDOW_WIDTH: u32 = 1600;
pub const WINDOW_HEIGHT: u32 = 1200;

// Frame pacing
pub const TARGET_FPS: u32 = 60;
pub const FPS_AVERAGE_SEC: f32 = 0.5; // HUD refresh period

// Camera control
pub const ORBIT_STEP_DEG: f32 = 0.1; // per arrow-key press or repeat
pub const DOLLY_STEP: f32 = 1.0; // world units per page-key press or repeat

// Reference grid
pub const GRID_SLICES: u32 = 200;
pub const GRID_SPACING: f32 = 5.0;

// Markers shown with the grid and the bounding box
pub const MARKER_RADIUS: f32 = 2.0;

// Background
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;
