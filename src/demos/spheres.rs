//! Six colored spheres orbiting evenly spaced on a circle.

use anyhow::{ensure, Result};
use glam::Vec3;
use std::f32::consts::TAU;

use crate::camera::CameraConfig;
use crate::config::SpheresConfig;
use crate::scene::{hex_color, Node, NodeId, PointLight, SceneGraph, Shape};
use crate::Demo;

/// Original palette: red, orange, yellow, green, blue, purple. Repeats
/// when the configured count exceeds six.
pub const SPHERE_PALETTE: [u32; 6] = [
    0xff4444, 0xff8044, 0xffff44, 0x44ff44, 0x4444ff, 0x8044ff,
];

/// Position of sphere `index` at time `time`, on the circle of radius
/// `orbit_radius` in the plane z = `z_plane`. Pure and total for any index
/// below `count`.
pub fn orbit_position(
    index: usize,
    count: usize,
    orbit_radius: f32,
    z_plane: f32,
    time: f32,
) -> Vec3 {
    let angle = TAU / count as f32 * index as f32 + time;
    Vec3::new(
        angle.cos() * orbit_radius,
        angle.sin() * orbit_radius,
        z_plane,
    )
}

pub struct OrbitingSpheres {
    config: SpheresConfig,
    spheres: Vec<NodeId>,
}

impl OrbitingSpheres {
    pub fn new(config: SpheresConfig) -> Self {
        Self {
            config,
            spheres: Vec::new(),
        }
    }

    /// Handles of the animated spheres, in phase order
    pub fn sphere_ids(&self) -> &[NodeId] {
        &self.spheres
    }
}

impl Demo for OrbitingSpheres {
    fn build(&mut self, scene: &mut SceneGraph) -> Result<()> {
        ensure!(self.config.count > 0, "sphere count must be at least 1");

        for i in 0..self.config.count {
            let color = hex_color(SPHERE_PALETTE[i % SPHERE_PALETTE.len()]);
            let id = scene.add(Node::new(
                Shape::Sphere {
                    radius: self.config.sphere_radius,
                },
                color,
            ));
            self.spheres.push(id);
        }

        scene.set_point_light(PointLight {
            position: Vec3::new(0.0, 0.0, 50.0),
            intensity: 1.5,
        });
        scene.set_ambient(0.1);

        // Start every sphere at its t = 0 pose
        self.update(scene, 0.0);
        Ok(())
    }

    fn update(&mut self, scene: &mut SceneGraph, time: f32) {
        let count = self.spheres.len();
        for (i, &id) in self.spheres.iter().enumerate() {
            let position = orbit_position(
                i,
                count,
                self.config.orbit_radius,
                self.config.z_plane,
                time,
            );
            scene.set_position(id, position);
        }
    }

    fn camera(&self) -> CameraConfig {
        CameraConfig {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            ..CameraConfig::default()
        }
    }

    fn time_scale(&self) -> f32 {
        self.config.time_scale
    }

    fn name(&self) -> &str {
        "spheres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_3, PI};

    const K: f32 = 20.0;

    #[test]
    fn positions_lie_on_orbit_circle() {
        for i in 0..6 {
            for step in 0..50 {
                let t = step as f32 * 0.37;
                let p = orbit_position(i, 6, K, 30.0, t);
                assert!((p.x * p.x + p.y * p.y - K * K).abs() < 1e-2);
                assert_eq!(p.z, 30.0);
            }
        }
    }

    #[test]
    fn orbit_period_is_two_pi() {
        let a = orbit_position(2, 6, K, 30.0, 1.25);
        let b = orbit_position(2, 6, K, 30.0, 1.25 + 2.0 * PI);
        assert!((a - b).length() < 1e-3);
    }

    #[test]
    fn spheres_are_evenly_spaced() {
        let t = 0.8;
        for i in 0..6 {
            let a = orbit_position(i, 6, K, 30.0, t);
            let b = orbit_position((i + 1) % 6, 6, K, 30.0, t);
            let angle_a = a.y.atan2(a.x);
            let angle_b = b.y.atan2(b.x);
            let mut spacing = angle_b - angle_a;
            while spacing < 0.0 {
                spacing += 2.0 * PI;
            }
            assert!((spacing - FRAC_PI_3).abs() < 1e-4);
        }
    }

    #[test]
    fn reference_positions_at_t_zero() {
        let p0 = orbit_position(0, 6, K, 30.0, 0.0);
        assert!((p0 - Vec3::new(20.0, 0.0, 30.0)).length() < 1e-5);

        let p1 = orbit_position(1, 6, K, 30.0, 0.0);
        assert!((p1.x - 20.0 * FRAC_PI_3.cos()).abs() < 1e-4);
        assert!((p1.y - 17.3205).abs() < 1e-3);
    }

    #[test]
    fn update_is_deterministic() {
        let a = orbit_position(3, 6, K, 30.0, 123.456);
        let b = orbit_position(3, 6, K, 30.0, 123.456);
        assert_eq!(a, b);
    }

    #[test]
    fn build_retains_count_handles() {
        let mut demo = OrbitingSpheres::new(SpheresConfig::default());
        let mut scene = SceneGraph::new();
        demo.build(&mut scene).unwrap();

        assert_eq!(demo.sphere_ids().len(), 6);
        assert_eq!(scene.len(), 6);
        // t = 0 pose already applied
        assert!((scene.position(demo.sphere_ids()[0]) - Vec3::new(20.0, 0.0, 30.0)).length() < 1e-5);
    }

    #[test]
    fn build_rejects_zero_spheres() {
        let config = SpheresConfig {
            count: 0,
            ..SpheresConfig::default()
        };
        let mut demo = OrbitingSpheres::new(config);
        let mut scene = SceneGraph::new();
        assert!(demo.build(&mut scene).is_err());
    }
}
