//! Configuration for rosterview
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Maximum accepted length of the search term, in characters
pub const SEARCH_MAX_CHARS: usize = 40;

/// Main configuration for a rosterview instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for persisted data (one file per storage key)
    pub data_dir: PathBuf,

    /// Key under which the roster array is stored
    pub storage_key: String,

    // -------------------------------------------------------------------------
    // Fixture Configuration
    // -------------------------------------------------------------------------
    /// Number of sample records generated when storage is empty
    pub fixture_count: usize,

    // -------------------------------------------------------------------------
    // View Configuration
    // -------------------------------------------------------------------------
    /// Rows per page at startup
    pub default_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./rosterview_data"),
            storage_key: "users".to_string(),
            fixture_count: 45,
            default_page_size: 10,
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
    /// Set the data directory (root for all persisted keys)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the key under which the roster is stored
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Set the number of fixture records generated on first run
    pub fn fixture_count(mut self, count: usize) -> Self {
        self.config.fixture_count = count;
        self
    }

    /// Set the startup page size (must be non-zero; zero falls back to the default)
    pub fn default_page_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.config.default_page_size = size;
        }
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
