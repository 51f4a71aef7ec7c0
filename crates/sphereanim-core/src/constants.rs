use crate::color::Color;
use glam::Vec3;

// Shared simulation tuning constants. `SceneConfig::default()` is built from these.

// Bounding cuboid
pub const CUBE_BOUND: f32 = 20.0; // lateral half-extent of the drawn box
pub const CUBE_ZMAX: f32 = 10.0;
pub const CUBE_ZMIN: f32 = -50.0;
pub const MIN_POS: Vec3 = Vec3::new(-CUBE_BOUND, -CUBE_BOUND, CUBE_ZMIN);
pub const MAX_POS: Vec3 = Vec3::new(CUBE_BOUND, CUBE_BOUND, CUBE_ZMAX);

// Spheres spawn and stay within half the box laterally
pub const LATERAL_BOUND: f32 = CUBE_BOUND / 2.0;

// Sphere look
pub const SPHERE_RADIUS: f32 = 0.5;
pub const WIRE_COUNT: u32 = 4; // rings and slices of the wireframe

// Speeds in world units per frame
pub const MIN_SPEED: f32 = 0.01;
pub const MAX_SPEED: f32 = 0.02;
pub const DEPTH_MIN_SPEED: f32 = 2.0 * MIN_SPEED;
pub const DEPTH_MAX_SPEED: f32 = 4.0 * MAX_SPEED;
pub const LATERAL_NEGATIVE_PROBABILITY: f64 = 0.5;
pub const DEPTH_NEGATIVE_PROBABILITY: f64 = 0.8; // most spheres recede toward zmin

// Fade bands sit at 80% of the boundary, the light edge a further 80% in
pub const RIM_FACTOR: f32 = 0.8;

// Palette
pub const COLOR_LIGHT: Color = Color::BLUE;
pub const COLOR_DARK: Color = Color::rgb(0, 24, 51); // DARKBLUE scaled by 0.3
pub const SPHERE_COLOR: Color = COLOR_LIGHT;

// Proximity graph
pub const SPHERE_COUNT: usize = 30;
pub const CONNECTION_THRESHOLD: f32 = 7.0;
pub const NEAR_TIER_FRACTION: f32 = 0.9; // of threshold², below which lines blend colors

// Translucent wall close to the depth maximum
pub const WALL_Z_OFFSET: f32 = 29.5;
pub const WALL_THICKNESS: f32 = 0.25;
pub const WALL_COLOR: Color = Color::BLACK.with_alpha(200);
