use crate::color::Color;
use crate::config::{SceneConfig, SpeedRange};
use crate::constants::{SPHERE_COLOR, SPHERE_RADIUS};
use glam::Vec3;
use rand::Rng;

/// One drifting sphere.
///
/// `color` and `connectable` are derived: the scene recomputes both from
/// `position` on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    /// Displacement per frame.
    pub velocity: Vec3,
    pub radius: f32,
    pub color: Color,
    pub connectable: bool,
}

impl Sphere {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            radius: SPHERE_RADIUS,
            color: SPHERE_COLOR,
            connectable: true,
        }
    }

    /// Spawn a sphere uniformly inside the configured volume with a constant
    /// velocity whose per-axis magnitude and sign are drawn from the
    /// configured speed ranges.
    pub fn random<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let ext = config.spawn_extent;
        let position = Vec3::new(
            rng.gen_range(-ext..=ext),
            rng.gen_range(-ext..=ext),
            rng.gen_range(config.z_min..=config.z_max),
        );
        let velocity = Vec3::new(
            random_speed(&config.lateral_speed, rng),
            random_speed(&config.lateral_speed, rng),
            random_speed(&config.depth_speed, rng),
        );
        Self {
            position,
            velocity,
            radius: config.sphere_radius,
            color: config.light,
            connectable: true,
        }
    }
}

fn random_speed<R: Rng + ?Sized>(range: &SpeedRange, rng: &mut R) -> f32 {
    let sign = if rng.gen_bool(range.negative_probability) {
        -1.0
    } else {
        1.0
    };
    sign * rng.gen_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_spheres_spawn_inside_volume() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let s = Sphere::random(&cfg, &mut rng);
            assert!(s.position.x.abs() <= cfg.spawn_extent);
            assert!(s.position.y.abs() <= cfg.spawn_extent);
            assert!(s.position.z >= cfg.z_min && s.position.z <= cfg.z_max);
            assert!(s.connectable);
            assert_eq!(s.radius, cfg.sphere_radius);
        }
    }

    #[test]
    fn random_velocities_respect_speed_ranges() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let v = Sphere::random(&cfg, &mut rng).velocity;
            for lateral in [v.x, v.y] {
                assert!(lateral.abs() >= cfg.lateral_speed.min);
                assert!(lateral.abs() <= cfg.lateral_speed.max);
            }
            assert!(v.z.abs() >= cfg.depth_speed.min);
            assert!(v.z.abs() <= cfg.depth_speed.max);
        }
    }

    #[test]
    fn depth_velocity_is_biased_toward_zmin() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let n = 2000;
        let receding = (0..n)
            .filter(|_| Sphere::random(&cfg, &mut rng).velocity.z < 0.0)
            .count();
        let share = receding as f32 / n as f32;
        assert!(share > 0.7 && share < 0.9, "receding share {share}");
    }
}
