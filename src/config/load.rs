//! The main config loading module for mls.
//!
//! Handles loading and deserializing settings from `meta-ls.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! Also writes the commented default config for `mls --init`.

use crate::config::{General, InternalLayout, Layout};
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "META_LS_CONFIG";

const DEFAULT_CONFIG: &str = r##"# meta-ls.toml - default configuration for mls

# Commented values are the internal defaults.

[general]
# Show children whose names start with '.'
# show_hidden = true
# Sort children by name; otherwise they come in tree order
# sort = true
# case_insensitive = true

[layout]
# Narrowest entry assumed when bounding the column count (columns <= width / min_entry_width)
# min_entry_width = 4
# Lay entries out in columns when writing to a terminal
# columns = true
"##;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw configuration as read from the toml file.
/// Converted into the main [Config] struct once read.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    layout: Layout,
}

/// Main configuration struct for mls.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    general: General,
    layout: InternalLayout,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            layout: InternalLayout::from(raw.layout),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// A missing file gives the defaults silently; an unreadable or invalid one gives the
    /// defaults with a warning on stderr.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[mls] {} ({})", e, path.display());
                Self::default()
            }
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(raw.into())
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn layout(&self) -> &InternalLayout {
        &self.layout
    }

    /// Determine the default configuration file path.
    /// Checks the META_LS_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/meta-ls/meta-ls.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("meta-ls/meta-ls.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/meta-ls/meta-ls.toml");
        }
        PathBuf::from("meta-ls.toml")
    }

    /// Generate the default configuration file at `path`.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_is_default() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Config::parse("")?, Config::default());
        Ok(())
    }

    #[test]
    fn default_config_file_parses_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Config::parse(DEFAULT_CONFIG)?, Config::default());
        Ok(())
    }

    #[test]
    fn partial_tables() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::parse(
            r#"
            [general]
            show_hidden = false

            [layout]
            min_entry_width = 8
            "#,
        )?;
        assert!(!config.general().show_hidden());
        assert!(config.general().sort());
        assert_eq!(config.layout().min_entry_width(), 8);
        assert!(config.layout().columns());
        Ok(())
    }

    #[test]
    fn min_entry_width_is_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::parse("[layout]\nmin_entry_width = 0\n")?;
        assert_eq!(config.layout().min_entry_width(), 1);
        Ok(())
    }

    #[test]
    fn invalid_config_is_a_parse_error() {
        let err = Config::parse("[layout]\ncolumns = \"yes\"\n");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn generate_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("meta-ls.toml");

        Config::generate_default(&path)?;
        assert_eq!(Config::load_from(&path)?, Config::default());

        let err = Config::generate_default(&path).err().ok_or("expected an error")?;
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        Ok(())
    }
}
