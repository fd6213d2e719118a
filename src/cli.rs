// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Spheres,
    Crankshaft,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "flywheel")]
#[command(about = "Animated 3D mechanism demos", long_about = None)]
pub struct Cli {
    /// Which demo to run
    #[arg(long, value_enum, default_value = "spheres")]
    pub demo: DemoKind,

    /// JSON config file overriding the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Play this many fixed-step frames headless (no window) and exit
    #[arg(long)]
    pub frames: Option<u64>,
}
