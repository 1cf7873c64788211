//! Command line handling and configuration selection

use std::path::PathBuf;

use tomato_config::{ConfigError, IconConfig};

/// Where the run configuration comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults (output directory may still come from TOMATO_ICONS_DIR)
    #[default]
    Defaults,
    /// A JSON file given as the first argument
    File(PathBuf),
}

impl ConfigSource {
    /// Parse from the process arguments (without the program name)
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Defaults,
        }
    }

    pub fn load(&self) -> Result<IconConfig, ConfigError> {
        match self {
            Self::Defaults => Ok(IconConfig::from_env()),
            Self::File(path) => IconConfig::load(path),
        }
    }
}
