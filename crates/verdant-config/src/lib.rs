//! Configuration for the Verdant garden.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Every section falls back to its defaults when missing, so
//! older and newer config files both load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, CatalogConfig, Config, DebugConfig, GenerationConfig, LocomotionConfig,
    ProximityConfig, default_config_dir,
};
pub use error::ConfigError;
