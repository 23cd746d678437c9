//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NDC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hypercube configuration
    #[serde(default)]
    pub cube: CubeConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NDC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NDC_CUBE__DIMENSIONS=4 -> cube.dimensions = 4
        figment = figment.merge(Env::prefixed("NDC_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Hypercube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Requested number of dimensions
    ///
    /// Signed so that zero or negative requests reach the geometry engine,
    /// which clamps them to 1.
    pub dimensions: i64,
    /// Number of projected vertices printed per frame
    pub vertices_to_show: usize,
}

impl CubeConfig {
    /// Dimension count to hand to the geometry engine
    ///
    /// Negative requests map to 0; the engine raises anything below 1.
    pub fn dimension_count(&self) -> usize {
        usize::try_from(self.dimensions).unwrap_or(0)
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            dimensions: 5,
            vertices_to_show: 8,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
