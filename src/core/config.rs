use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::params::DEFAULT_RAILS;

/// File name looked up in the user config directory and the working directory.
pub const CONFIG_FILE_NAME: &str = "decipher.toml";

/// Caller-side defaults for the `decipher` CLI.
///
/// The engine itself never reads these; callers use them to fill in request
/// fields the user left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Rail count when none (or a non-numeric one) is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rails: Option<usize>,
    /// Vigenère key when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    /// Directory for `--save` output files (tilde is expanded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
}

impl Settings {
    pub fn rails(&self) -> usize {
        self.default_rails.unwrap_or(DEFAULT_RAILS)
    }

    /// Resolved `output_dir`, or the working directory.
    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).as_ref()),
            None => PathBuf::from("."),
        }
    }
}

/// Settings loaded from one or more TOML layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DecipherConfig {
    #[serde(default)]
    pub settings: Settings,
}

impl DecipherConfig {
    /// Parses a configuration layer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../decipher.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads one layer from a file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Where user and project-local layers are looked for, lowest priority first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("decipher").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/decipher/decipher.toml` (user overrides)
    /// 3. `./decipher.toml` (project-local overrides)
    ///
    /// Later layers override earlier ones field by field. A layer that cannot
    /// be read or parsed is skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(layer) => {
                    debug!(path = %path.display(), "loaded config layer");
                    config.merge(layer);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable config");
                }
            }
        }

        Ok(config)
    }

    /// Applies an explicitly requested file on top; errors are not skipped here.
    pub fn with_file(mut self, path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let expanded = shellexpand::tilde(path);
        let layer = Self::load_from_file(Path::new(expanded.as_ref()))
            .map_err(|e| format!("Failed to load config from {}: {}", expanded, e))?;
        debug!(path = %expanded, "loaded explicit config");
        self.merge(layer);
        Ok(self)
    }

    /// Merges another layer into this one; fields set in `other` win.
    pub fn merge(&mut self, other: DecipherConfig) {
        let theirs = other.settings;
        if theirs.default_rails.is_some() {
            self.settings.default_rails = theirs.default_rails;
        }
        if theirs.default_key.is_some() {
            self.settings.default_key = theirs.default_key;
        }
        if theirs.output_dir.is_some() {
            self.settings.output_dir = theirs.output_dir;
        }
    }
}
