//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Loads and provides access to the server configuration.
///
/// # File Format
///
/// ```text
/// bind_address: "0.0.0.0:8080"
/// index_page: index.html
/// log_file: app.log        # or null to log to stdout
/// log_level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use equation_solver::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Listening on {}", loader.config().bind_address);
/// # Ok::<(), equation_solver::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`ServerConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        // An empty or comment-only document deserializes as null.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Option<ServerConfig> =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            config: config.unwrap_or_default(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ServerConfig {
        self.config
    }
}
