//! Command-line arguments for the garden driver.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Verdant command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "verdant", about = "Walk a procedurally grown voxel garden")]
pub struct CliArgs {
    /// World seed for plant generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Avatar walking speed in units per second.
    #[arg(long)]
    pub speed: Option<f32>,

    /// Plant focus radius.
    #[arg(long)]
    pub interaction_radius: Option<f32>,

    /// Garden catalog RON file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of fixed simulation ticks to run headless.
    #[arg(long, default_value_t = 1800)]
    pub ticks: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.generation.world_seed = seed;
        }
        if let Some(speed) = args.speed {
            self.locomotion.speed = speed;
        }
        if let Some(radius) = args.interaction_radius {
            self.proximity.interaction_radius = radius;
        }
        if let Some(ref path) = args.catalog {
            self.catalog.path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
