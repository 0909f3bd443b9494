// File: ./src/config.rs
// Handles configuration loading and defaults.
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_grace_minutes() -> u32 {
    60
}
fn default_layout_token() -> String {
    "${voffset 3}".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// How long a timed event stays listed after its start, in minutes.
    #[serde(default = "default_grace_minutes")]
    pub grace_minutes: u32,
    /// Opaque spacing hint emitted around output lines, verbatim.
    #[serde(default = "default_layout_token")]
    pub layout_token: String,
    /// Report failures on stderr with a non-zero exit instead of the
    /// default widget behavior (single line on stdout, exit 0).
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            grace_minutes: 60,
            layout_token: "${voffset 3}".to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "conky-agenda")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads an explicit config file, or the default location when `path`
    /// is None. A missing file at the default location means defaults; an
    /// explicitly named file must load, and a file that exists but fails
    /// to read or parse is always an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let Some(default) = Self::default_path() else {
                    log::warn!("no config directory could be determined, using defaults");
                    return Ok(Self::default());
                };
                if !default.exists() {
                    log::debug!("no config file at '{}', using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn grace(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.grace_minutes))
    }
}
