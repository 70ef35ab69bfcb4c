//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (bound flag defaults)
//! 2. Config file: `--config <FILE>`, or `$XDG_CONFIG_HOME/fauxbase/fauxbase.toml`
//! 3. Environment variables: `FAUXBASE_*` prefix
//! 4. Flags passed on the command line

pub mod error;
pub mod store;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult};
pub use store::{ConfigFile, ConfigStore, ResolvedConfig, Sources, ENV_PREFIX};

/// Unified configuration for fauxbase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Enable debug logging
    pub debug: bool,
}

/// Get the XDG config directory for fauxbase.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fauxbase").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fauxbase.toml"))
}

impl Settings {
    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the template to `path`, creating parent directories.
    ///
    /// Refuses to replace an existing file unless `force` is set; returns
    /// `Ok(false)` in that case.
    pub fn write_template(path: &Path, force: bool) -> ConfigResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::io(format!("create {}", parent.display()), e))?;
        }
        std::fs::write(path, Self::template())
            .map_err(|e| ConfigError::io(format!("write {}", path.display()), e))?;
        Ok(true)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# fauxbase configuration
#
# Precedence (highest first):
#   --debug flag
#   FAUXBASE_* environment variables (e.g. FAUXBASE_DEBUG=true)
#   this file
#   compiled defaults

# Enable debug logging
# debug = false
"#
        .to_string()
    }
}
