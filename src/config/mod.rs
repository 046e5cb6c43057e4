//! Configuration module for tsgen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TSGEN_*)
//! 3. Config file (`--config` or ~/.config/tsgen/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, default_config_path, load, load_with_warnings, ConfigWarning,
};
pub use types::{ColorMode, Config, OutputConfig, ScaffoldConfig};
