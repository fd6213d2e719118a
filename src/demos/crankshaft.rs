//! Schematic crankshaft: flywheel, base stick, rotating pins and the
//! connecting boxes that bridge them. A visual approximation driven by
//! per-part trigonometric formulas, not a physical simulation.

use anyhow::{ensure, Result};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::camera::CameraConfig;
use crate::config::CrankshaftConfig;
use crate::scene::{hex_color, Node, NodeId, PointLight, SceneGraph, Shape};
use crate::Demo;

const PART_COLOR: u32 = 0x777777;

/// Crank angle of pin `index` at time `time`: each pin leads the previous
/// one by half a turn.
pub fn pin_phase(index: usize, time: f32) -> f32 {
    PI * (0.5 + index as f32) + time
}

/// Pin `index` rotates on a circle of radius `throw` around the shaft axis.
pub fn pin_position(index: usize, throw: f32, time: f32) -> Vec3 {
    let value = pin_phase(index, time);
    Vec3::new(
        value.sin() * throw,
        value.cos() * throw,
        index as f32 * 4.0 + 3.0,
    )
}

/// Spin of base segment `index` about its local Y, synchronized with the
/// pin at the same phase.
pub fn base_spin(index: usize, time: f32) -> f32 {
    -pin_phase(index, time)
}

/// Phase of connecting box `index`: quarter-turn steps with a parity bump
/// so consecutive boxes interleave between pin and base. Kept for its
/// visual behavior; it is not load-bearing mechanics.
pub fn link_phase(index: usize, time: f32) -> f32 {
    let offset = index + usize::from(index % 2 == 0);
    FRAC_PI_2 * offset as f32 + time
}

/// Box `index` oscillates at half the pin throw.
pub fn link_position(index: usize, throw: f32, time: f32) -> Vec3 {
    let value = link_phase(index, time);
    Vec3::new(
        value.sin() * throw * 0.5,
        value.cos() * throw * 0.5,
        index as f32 * 2.0 + 2.0,
    )
}

pub struct Crankshaft {
    config: CrankshaftConfig,
    pins: Vec<NodeId>,
    base: Vec<NodeId>,
    links: Vec<NodeId>,
}

impl Crankshaft {
    pub fn new(config: CrankshaftConfig) -> Self {
        Self {
            config,
            pins: Vec::new(),
            base: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn pin_ids(&self) -> &[NodeId] {
        &self.pins
    }

    pub fn base_ids(&self) -> &[NodeId] {
        &self.base
    }

    pub fn link_ids(&self) -> &[NodeId] {
        &self.links
    }

    fn lying_cylinder(radius: f32, height: f32) -> Node {
        // cylinders are modeled along Y; lay them along the shaft (Z)
        Node::new(Shape::Cylinder { radius, height }, hex_color(PART_COLOR))
            .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
    }
}

impl Demo for Crankshaft {
    fn build(&mut self, scene: &mut SceneGraph) -> Result<()> {
        ensure!(
            self.config.cylinders > 0,
            "crankshaft needs at least one cylinder"
        );
        let count = self.config.cylinders;
        let throw = self.config.piston_size;

        // static flywheel and rim at the shaft origin
        scene.add(Self::lying_cylinder(8.0, 1.0));
        scene.add(Node::new(
            Shape::Torus {
                radius: 7.5,
                tube: 0.8,
            },
            hex_color(PART_COLOR),
        ));

        // base stick: one segment more than there are pins
        for i in 0..=count {
            let id = scene.add(
                Self::lying_cylinder(1.0, 1.0)
                    .with_position(Vec3::new(0.0, 0.0, i as f32 * 4.0 + 1.0)),
            );
            self.base.push(id);
        }

        // crank pins
        for i in 0..count {
            let id = scene.add(
                Self::lying_cylinder(1.0, 1.0).with_position(pin_position(i, throw, 0.0)),
            );
            self.pins.push(id);
        }

        // connecting boxes, two per pin
        for i in 0..count * 2 {
            let id = scene.add(
                Node::new(
                    Shape::Cuboid {
                        size: Vec3::new(1.5, 1.0, throw * 2.0),
                    },
                    hex_color(PART_COLOR),
                )
                .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
                .with_position(link_position(i, throw, 0.0)),
            );
            self.links.push(id);
        }

        scene.set_point_light(PointLight {
            position: Vec3::new(25.0, 25.0, 100.0),
            intensity: 1.0,
        });
        scene.set_ambient(0.7);

        self.update(scene, 0.0);
        Ok(())
    }

    fn update(&mut self, scene: &mut SceneGraph, time: f32) {
        let throw = self.config.piston_size;

        for (i, &id) in self.pins.iter().enumerate() {
            scene.set_position(id, pin_position(i, throw, time));
        }

        for (i, &id) in self.base.iter().enumerate() {
            let mut rotation = scene.rotation(id);
            rotation.y = base_spin(i, time);
            scene.set_rotation(id, rotation);
        }

        for (i, &id) in self.links.iter().enumerate() {
            scene.set_position(id, link_position(i, throw, time));
            let mut rotation = scene.rotation(id);
            rotation.y = -link_phase(i, time);
            scene.set_rotation(id, rotation);
        }
    }

    fn camera(&self) -> CameraConfig {
        CameraConfig {
            position: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::new(0.0, 0.0, 50.0),
            ..CameraConfig::default()
        }
    }

    fn time_scale(&self) -> f32 {
        self.config.time_scale
    }

    fn name(&self) -> &str {
        "crankshaft"
    }
}
