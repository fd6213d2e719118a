mod crankshaft;
mod spheres;

pub use crankshaft::{
    base_spin, link_phase, link_position, pin_phase, pin_position, Crankshaft,
};
pub use spheres::{orbit_position, OrbitingSpheres, SPHERE_PALETTE};

use crate::config::Config;
use crate::Demo;

pub fn create_spheres_demo(config: &Config) -> Box<dyn Demo> {
    Box::new(OrbitingSpheres::new(config.spheres.clone()))
}

pub fn create_crankshaft_demo(config: &Config) -> Box<dyn Demo> {
    Box::new(Crankshaft::new(config.crankshaft.clone()))
}
