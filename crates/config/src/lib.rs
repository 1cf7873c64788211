//! Shared configuration for the tomato icon generator
//!
//! This crate is the single source of truth for which icon sizes are
//! produced and where the files land. A configuration can come from the
//! defaults, a JSON file, or the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Icon sizes produced by default
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Default file name prefix (`icon-16.png`, ...)
pub const DEFAULT_FILE_PREFIX: &str = "icon";

/// Largest icon edge accepted, in pixels
pub const MAX_SIZE: u32 = 4096;

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "TOMATO_ICONS_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No icon sizes configured")]
    NoSizes,

    #[error("Invalid icon size: {0} (must be in 1..={max})", max = MAX_SIZE)]
    InvalidSize(u32),
}

/// Which icons to render and where to write them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Edge lengths in pixels, rendered in this order
    pub sizes: Vec<u32>,
    /// Directory the PNG files are written to
    pub output_dir: PathBuf,
    /// File name prefix, joined to the size with a dash
    pub file_prefix: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

impl IconConfig {
    /// Create a config for the given sizes with default paths
    pub fn new(sizes: impl Into<Vec<u32>>) -> Self {
        Self {
            sizes: sizes.into(),
            ..Default::default()
        }
    }

    /// Defaults, with the output directory taken from TOMATO_ICONS_DIR if set
    pub fn from_env() -> Self {
        Self::default().with_output_dir_override(std::env::var(OUTPUT_DIR_ENV).ok())
    }

    /// Parse a JSON config; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file, then apply the environment override
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?.with_output_dir_override(std::env::var(OUTPUT_DIR_ENV).ok()))
    }

    /// Replace the output directory when `dir` is a non-empty value
    pub fn with_output_dir_override(mut self, dir: Option<String>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        self
    }

    /// Reject configs that would produce no icons, empty images, or sizes
    /// above [`MAX_SIZE`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0 || s > MAX_SIZE) {
            return Err(ConfigError::InvalidSize(size));
        }
        Ok(())
    }

    /// File name for one icon, e.g. `icon-32.png`
    pub fn file_name(&self, size: u32) -> String {
        format!("{}-{}.png", self.file_prefix, size)
    }

    /// Full output path for one icon
    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(self.file_name(size))
    }
}
