//! Configuration management for the Opttab MCP client.

mod settings;

pub use settings::{ApiConfig, Config, DEFAULT_BASE_URL, DemoConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "opttab", "opttab-mcp")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::config("Could not determine config directory"))
}
