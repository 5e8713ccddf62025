//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Conventional backing-file name in the working directory
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Main configuration for a Bookshelf store
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON backing file holding the serialized collection.
    /// Created on the first save if it does not exist.
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
