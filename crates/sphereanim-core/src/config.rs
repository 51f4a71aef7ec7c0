//! Simulation parameters gathered into one struct.
//!
//! Every knob the scene reads lives here: the cuboid extents, per-axis
//! boundary policy, the speed ranges used when spawning, the fade bands that
//! darken spheres near a face, and the optional translucent wall. The
//! `Default` impl reproduces the canonical animation from [`crate::constants`].

use crate::color::Color;
use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const LATERAL: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// X and Y span the square cross-section; Z is depth.
    #[inline]
    pub fn is_lateral(self) -> bool {
        !matches!(self, Axis::Z)
    }

    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        v[self.index()]
    }

    #[inline]
    pub fn set(self, v: &mut Vec3, value: f32) {
        v[self.index()] = value;
    }
}

/// What happens to a coordinate that leaves `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Hold the coordinate on the wall it crossed. Velocity is left alone,
    /// so the sphere slides along the wall until it drifts back inside.
    Clamp,
    /// Teleport to the opposite wall.
    Wrap,
}

impl BoundaryPolicy {
    pub fn apply(self, coord: f32, min: f32, max: f32) -> f32 {
        match self {
            BoundaryPolicy::Clamp if coord > max => max,
            BoundaryPolicy::Clamp if coord < min => min,
            BoundaryPolicy::Wrap if coord > max => min,
            BoundaryPolicy::Wrap if coord < min => max,
            _ => coord,
        }
    }
}

/// Magnitude range and sign bias for one axis of the spawn velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
    pub negative_probability: f64,
}

/// Result of testing a position against a [`FadeBand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fade {
    Light,
    /// Fraction from dark (0.0) to light (1.0).
    Blend(f32),
    /// Fully dark; the sphere drops out of the proximity graph.
    Dark,
}

/// Band over which a sphere's color fades from light to dark as it
/// approaches a face of the cuboid.
///
/// Lateral bands measure `|coord|` and darken toward both walls, with
/// `0 <= rim_start < rim_end`. The depth band only acts on negative depth and
/// darkens toward `zmin`, with `rim_end < rim_start <= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeBand {
    pub axis: Axis,
    pub rim_start: f32,
    pub rim_end: f32,
}

impl FadeBand {
    /// Depth band ending at `RIM_FACTOR * zmin`.
    pub fn depth(z_min: f32) -> Self {
        let rim_end = RIM_FACTOR * z_min;
        Self {
            axis: Axis::Z,
            rim_start: RIM_FACTOR * rim_end,
            rim_end,
        }
    }

    /// Lateral band ending at `RIM_FACTOR * bound`.
    pub fn lateral(axis: Axis, bound: f32) -> Self {
        let rim_end = RIM_FACTOR * bound;
        Self {
            axis,
            rim_start: RIM_FACTOR * rim_end,
            rim_end,
        }
    }

    pub fn classify(&self, position: Vec3) -> Fade {
        let coord = self.axis.get(position);
        let width = self.rim_end - self.rim_start;
        if self.axis.is_lateral() {
            let dist = coord.abs();
            if dist > self.rim_end {
                Fade::Dark
            } else if dist > self.rim_start {
                Fade::Blend((self.rim_end - dist) / width)
            } else {
                Fade::Light
            }
        } else if coord < 0.0 {
            if coord < self.rim_end {
                Fade::Dark
            } else if coord < self.rim_start {
                Fade::Blend((self.rim_end - coord) / width)
            } else {
                Fade::Light
            }
        } else {
            Fade::Light
        }
    }
}

/// Slab drawn with alpha blending across the cuboid, offset along depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallConfig {
    pub box_min: Vec3,
    pub box_max: Vec3,
    pub z_offset: f32,
    pub thickness: f32,
    pub color: Color,
}

impl WallConfig {
    pub fn center(&self) -> Vec3 {
        let size = self.box_max - self.box_min;
        self.box_max - size * 0.5 + Vec3::new(0.0, 0.0, self.z_offset)
    }

    pub fn size(&self) -> Vec3 {
        let size = self.box_max - self.box_min;
        Vec3::new(size.x, size.y, self.thickness)
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            box_min: MIN_POS,
            box_max: MAX_POS,
            z_offset: WALL_Z_OFFSET,
            thickness: WALL_THICKNESS,
            color: WALL_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Lateral coordinates stay within `[-lateral_bound, lateral_bound]`.
    pub lateral_bound: f32,
    /// Lateral spawn positions are drawn from `[-spawn_extent, spawn_extent]`.
    pub spawn_extent: f32,
    pub z_min: f32,
    pub z_max: f32,
    pub lateral_policy: BoundaryPolicy,
    pub depth_policy: BoundaryPolicy,
    pub lateral_speed: SpeedRange,
    pub depth_speed: SpeedRange,
    pub sphere_radius: f32,
    pub wire_count: u32,
    pub light: Color,
    pub dark: Color,
    /// Applied in order each tick; later bands overwrite earlier colors.
    pub fade_bands: Vec<FadeBand>,
    pub near_tier_fraction: f32,
    pub wall: Option<WallConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lateral_bound: LATERAL_BOUND,
            spawn_extent: LATERAL_BOUND,
            z_min: CUBE_ZMIN,
            z_max: CUBE_ZMAX,
            lateral_policy: BoundaryPolicy::Clamp,
            depth_policy: BoundaryPolicy::Wrap,
            lateral_speed: SpeedRange {
                min: MIN_SPEED,
                max: MAX_SPEED,
                negative_probability: LATERAL_NEGATIVE_PROBABILITY,
            },
            depth_speed: SpeedRange {
                min: DEPTH_MIN_SPEED,
                max: DEPTH_MAX_SPEED,
                negative_probability: DEPTH_NEGATIVE_PROBABILITY,
            },
            sphere_radius: SPHERE_RADIUS,
            wire_count: WIRE_COUNT,
            light: COLOR_LIGHT,
            dark: COLOR_DARK,
            fade_bands: vec![FadeBand::depth(CUBE_ZMIN)],
            near_tier_fraction: NEAR_TIER_FRACTION,
            wall: Some(WallConfig::default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("depth range is invalid: zmin {min} must be finite and below zmax {max}")]
    DepthRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{axis:?} speed range [{min}, {max}] is invalid")]
    SpeedRange { axis: Axis, min: f32, max: f32 },
    #[error("{name} probability {value} is outside [0, 1]")]
    Probability { name: &'static str, value: f64 },
    #[error("{axis:?} fade band has zero width")]
    FadeBand { axis: Axis },
    #[error("near tier fraction {0} is outside (0, 1]")]
    NearTierFraction(f32),
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.z_min.is_finite() && self.z_max.is_finite() && self.z_min < self.z_max) {
            return Err(ConfigError::DepthRange {
                min: self.z_min,
                max: self.z_max,
            });
        }
        positive("lateral_bound", self.lateral_bound)?;
        positive("sphere_radius", self.sphere_radius)?;
        if !(self.spawn_extent >= 0.0 && self.spawn_extent.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "spawn_extent",
                value: self.spawn_extent,
            });
        }
        if self.wire_count == 0 {
            return Err(ConfigError::NonPositive {
                name: "wire_count",
                value: 0.0,
            });
        }
        check_speed(Axis::X, &self.lateral_speed, "lateral sign")?;
        check_speed(Axis::Z, &self.depth_speed, "depth sign")?;
        for band in &self.fade_bands {
            if !((band.rim_end - band.rim_start).abs() > f32::EPSILON) {
                return Err(ConfigError::FadeBand { axis: band.axis });
            }
        }
        if !(self.near_tier_fraction > 0.0 && self.near_tier_fraction <= 1.0) {
            return Err(ConfigError::NearTierFraction(self.near_tier_fraction));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn check_speed(axis: Axis, range: &SpeedRange, name: &'static str) -> Result<(), ConfigError> {
    if !(range.min >= 0.0 && range.min <= range.max && range.max.is_finite()) {
        return Err(ConfigError::SpeedRange {
            axis,
            min: range.min,
            max: range.max,
        });
    }
    if !(0.0..=1.0).contains(&range.negative_probability) {
        return Err(ConfigError::Probability {
            name,
            value: range.negative_probability,
        });
    }
    Ok(())
}
