// config.rs - Startup configuration, JSON-overridable
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub spheres: SpheresConfig,
    pub crankshaft: CrankshaftConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flywheel".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpheresConfig {
    /// Number of orbiting spheres; also sets the angular spacing 2π/N
    pub count: usize,
    /// Orbit circle radius
    pub orbit_radius: f32,
    /// Radius of each sphere mesh
    pub sphere_radius: f32,
    /// Fixed Z plane the orbit lives in
    pub z_plane: f32,
    /// Elapsed seconds → animation time
    pub time_scale: f32,
}

impl Default for SpheresConfig {
    fn default() -> Self {
        Self {
            count: 6,
            orbit_radius: 20.0,
            sphere_radius: 5.0,
            z_plane: 30.0,
            time_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrankshaftConfig {
    /// Crank pin count; the base stick has one more segment, links twice as many
    pub cylinders: usize,
    /// Pin throw radius; links orbit at half of it
    pub piston_size: f32,
    /// Elapsed seconds → animation time (original ran at 3× seconds)
    pub time_scale: f32,
}

impl Default for CrankshaftConfig {
    fn default() -> Self {
        Self {
            cylinders: 4,
            piston_size: 2.0,
            time_scale: 3.0,
        }
    }
}

impl Config {
    /// Load a JSON config file on top of the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would animate nothing or degenerate geometry
    pub fn validate(&self) -> Result<()> {
        if self.spheres.count == 0 {
            bail!("spheres.count must be at least 1");
        }
        if self.spheres.orbit_radius <= 0.0 || self.spheres.sphere_radius <= 0.0 {
            bail!("spheres radii must be positive");
        }
        if self.crankshaft.cylinders == 0 {
            bail!("crankshaft.cylinders must be at least 1");
        }
        if self.crankshaft.piston_size <= 0.0 {
            bail!("crankshaft.piston_size must be positive");
        }
        if self.window.width == 0 || self.window.height == 0 {
            bail!("window size must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let config = Config::default();
        assert_eq!(config.spheres.count, 6);
        assert_eq!(config.spheres.orbit_radius, 20.0);
        assert_eq!(config.spheres.z_plane, 30.0);
        assert_eq!(config.crankshaft.cylinders, 4);
        assert_eq!(config.crankshaft.piston_size, 2.0);
        assert_eq!(config.crankshaft.time_scale, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"spheres": {"count": 8}}"#).unwrap();
        assert_eq!(config.spheres.count, 8);
        assert_eq!(config.spheres.orbit_radius, 20.0);
        assert_eq!(config.crankshaft.cylinders, 4);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let mut config = Config::default();
        config.spheres.count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.crankshaft.cylinders = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut config = Config::default();
        config.crankshaft.piston_size = -2.0;
        assert!(config.validate().is_err());
    }
}
