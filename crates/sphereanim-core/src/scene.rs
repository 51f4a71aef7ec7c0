//! The animated scene: a fixed set of spheres drifting through the cuboid
//! and the proximity graph drawn between them.
//!
//! Per frame the driver calls [`Scene::update`] and then [`Scene::draw`].
//! Lateral coordinates are held on the wall they cross without reversing
//! velocity, so a sphere slides along the wall until its own drift carries
//! it back. Depth wraps around instead, which makes the depth axis behave
//! like a conveyor.

use crate::color::Color;
use crate::config::{Axis, ConfigError, Fade, SceneConfig};
use crate::render::{BlendMode, Renderer};
use crate::sphere::Sphere;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionTier {
    /// Drawn in the mean of both sphere colors.
    Near,
    /// Drawn in the dark reference color.
    Far,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub tier: ConnectionTier,
    pub color: Color,
}

/// Decide whether two positions are linked, and how.
///
/// Works on squared distances; `near_fraction` scales `threshold_sqr` to get
/// the near-tier cutoff.
pub fn classify_pair(
    a: Vec3,
    b: Vec3,
    threshold_sqr: f32,
    near_fraction: f32,
) -> Option<ConnectionTier> {
    let dist_sqr = a.distance_squared(b);
    if dist_sqr > threshold_sqr {
        None
    } else if dist_sqr <= near_fraction * threshold_sqr {
        Some(ConnectionTier::Near)
    } else {
        Some(ConnectionTier::Far)
    }
}

/// Red channel encoding of depth: `zmin` maps to 0, `zmax` to 255.
#[inline]
pub fn depth_red(depth: f32, z_min: f32, z_max: f32) -> u8 {
    (255.0 * (depth - z_min) / (z_max - z_min))
        .round()
        .clamp(0.0, 255.0) as u8
}

pub struct Scene {
    spheres: Vec<Sphere>,
    connection_threshold_sqr: f32,
    config: SceneConfig,
}

impl Scene {
    /// Canonical scene with randomly placed spheres.
    pub fn new(count: usize, threshold: f32) -> Self {
        Self::build(SceneConfig::default(), count, threshold, &mut rand::thread_rng())
    }

    pub fn with_config(
        config: SceneConfig,
        count: usize,
        threshold: f32,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, count, threshold, &mut rand::thread_rng())
    }

    /// Like [`Scene::with_config`] but drawing from a caller-supplied RNG, so a
    /// seeded generator gives a reproducible scene.
    pub fn with_rng<R: Rng + ?Sized>(
        config: SceneConfig,
        count: usize,
        threshold: f32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        validate(&config, threshold)?;
        Ok(Self::build(config, count, threshold, rng))
    }

    /// Scene over explicit spheres, e.g. a hand-placed layout.
    pub fn from_spheres(
        config: SceneConfig,
        spheres: Vec<Sphere>,
        threshold: f32,
    ) -> Result<Self, ConfigError> {
        validate(&config, threshold)?;
        Ok(Self {
            spheres,
            connection_threshold_sqr: threshold * threshold,
            config,
        })
    }

    fn build<R: Rng + ?Sized>(
        config: SceneConfig,
        count: usize,
        threshold: f32,
        rng: &mut R,
    ) -> Self {
        let spheres = (0..count)
            .map(|_| Sphere::random(&config, rng))
            .collect::<Vec<_>>();
        log::info!(
            "[scene] created {} spheres, connection threshold {:.2}",
            spheres.len(),
            threshold
        );
        Self {
            spheres,
            connection_threshold_sqr: threshold * threshold,
            config,
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn connection_threshold_sqr(&self) -> f32 {
        self.connection_threshold_sqr
    }

    /// Advance every sphere by one frame.
    pub fn update(&mut self) {
        for sphere in &mut self.spheres {
            advance(sphere, &self.config);
        }
    }

    /// Links between connectable spheres within the threshold, each unordered
    /// pair reported once with `a < b`.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let spheres = &self.spheres;
        spheres
            .iter()
            .enumerate()
            .filter(|(_, s)| s.connectable)
            .flat_map(move |(i, a)| {
                spheres
                    .iter()
                    .enumerate()
                    .skip(i + 1)
                    .filter(|(_, s)| s.connectable)
                    .filter_map(move |(j, b)| {
                        let tier = classify_pair(
                            a.position,
                            b.position,
                            self.connection_threshold_sqr,
                            self.config.near_tier_fraction,
                        )?;
                        let color = match tier {
                            ConnectionTier::Near => a.color.mean(b.color),
                            ConnectionTier::Far => self.config.dark,
                        };
                        Some(Connection { a: i, b: j, tier, color })
                    })
            })
    }

    /// Issue this frame's primitives. Never mutates the scene.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let wires = self.config.wire_count;
        for sphere in &self.spheres {
            renderer.draw_sphere_wires(sphere.position, sphere.radius, wires, wires, sphere.color);
        }

        for link in self.connections() {
            renderer.draw_line_3d(
                self.spheres[link.a].position,
                self.spheres[link.b].position,
                link.color,
            );
        }

        if let Some(wall) = &self.config.wall {
            renderer.set_blend_mode(BlendMode::Alpha);
            renderer.draw_cube(wall.center(), wall.size(), wall.color);
            renderer.set_blend_mode(BlendMode::Opaque);
        }
    }
}

fn validate(config: &SceneConfig, threshold: f32) -> Result<(), ConfigError> {
    let checked = config.validate().and_then(|_| {
        if threshold > 0.0 && threshold.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::NonPositive {
                name: "connection threshold",
                value: threshold,
            })
        }
    });
    if let Err(err) = &checked {
        log::warn!("[scene] rejecting config: {err}");
    }
    checked
}

// Order matters: fade reads the pre-boundary position, and the red override
// lands on top of whatever color the fade picked.
fn advance(sphere: &mut Sphere, config: &SceneConfig) {
    sphere.position += sphere.velocity;
    sphere.connectable = true;

    sphere.color = config.light;
    for band in &config.fade_bands {
        match band.classify(sphere.position) {
            Fade::Light => sphere.color = config.light,
            Fade::Blend(sf) => sphere.color = config.dark.lerp(config.light, sf),
            Fade::Dark => {
                sphere.color = config.dark;
                sphere.connectable = false;
            }
        }
    }

    let bound = config.lateral_bound;
    for axis in Axis::LATERAL {
        let coord = config
            .lateral_policy
            .apply(axis.get(sphere.position), -bound, bound);
        axis.set(&mut sphere.position, coord);
    }
    sphere.position.z = config
        .depth_policy
        .apply(sphere.position.z, config.z_min, config.z_max);

    sphere.color.r = depth_red(sphere.position.z, config.z_min, config.z_max);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLOR_DARK, COLOR_LIGHT};

    fn still(position: Vec3) -> Sphere {
        Sphere::new(position, Vec3::ZERO)
    }

    #[test]
    fn depth_red_spans_byte_range() {
        assert_eq!(depth_red(-50.0, -50.0, 10.0), 0);
        assert_eq!(depth_red(10.0, -50.0, 10.0), 255);
        assert_eq!(depth_red(-20.0, -50.0, 10.0), 128);
    }

    #[test]
    fn advance_fades_before_wrapping() {
        // Crossing zmin: the fade sees the pre-wrap depth, so the sphere is
        // dark and unlinked for the frame it reappears at zmax.
        let cfg = SceneConfig::default();
        let mut s = Sphere::new(Vec3::new(0.0, 0.0, -49.99), Vec3::new(0.0, 0.0, -0.05));
        advance(&mut s, &cfg);
        assert_eq!(s.position.z, cfg.z_max);
        assert!(!s.connectable);
        assert_eq!(s.color.g, COLOR_DARK.g);
        assert_eq!(s.color.b, COLOR_DARK.b);
        assert_eq!(s.color.r, 255);
    }

    #[test]
    fn advance_resets_connectable_each_tick() {
        let cfg = SceneConfig::default();
        let mut s = still(Vec3::new(0.0, 0.0, 0.0));
        s.connectable = false;
        advance(&mut s, &cfg);
        assert!(s.connectable);
        assert_eq!(s.color.g, COLOR_LIGHT.g);
    }

    #[test]
    fn no_fade_bands_keeps_light_color() {
        let cfg = SceneConfig {
            fade_bands: Vec::new(),
            ..SceneConfig::default()
        };
        let mut s = still(Vec3::new(0.0, 0.0, -45.0));
        advance(&mut s, &cfg);
        assert!(s.connectable);
        assert_eq!(s.color.b, COLOR_LIGHT.b);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let err = Scene::from_spheres(SceneConfig::default(), Vec::new(), 0.0).err();
        assert!(matches!(err, Some(ConfigError::NonPositive { .. })));
    }
}
