pub mod camera;
pub mod cli;
pub mod config;
pub mod demos;
pub mod geometry;
pub mod playback;
pub mod renderer;
pub mod scene;

// Re-export demo constructors for backward-compatible call sites
pub use demos::{create_crankshaft_demo, create_spheres_demo};

use crate::camera::CameraConfig;
use crate::scene::SceneGraph;

/// A self-contained animated demo: builds its scene once at startup, then
/// mutates the nodes it retained every frame.
pub trait Demo {
    /// Populate the scene graph and retain handles to the animated nodes.
    ///
    /// Fails when the configuration would produce nothing to animate; that
    /// is a setup error, never a per-frame check.
    fn build(&mut self, scene: &mut SceneGraph) -> anyhow::Result<()>;

    /// Recompute every retained node's transform for the given scaled time.
    /// Pure in (node index, time): nothing accumulates between frames.
    fn update(&mut self, scene: &mut SceneGraph, time: f32);

    /// Initial camera placement for this demo
    fn camera(&self) -> CameraConfig;

    /// Multiplier applied to elapsed seconds before update() sees them
    fn time_scale(&self) -> f32 {
        1.0
    }

    /// Get demo name for logging
    fn name(&self) -> &str {
        "Demo"
    }
}
