//! Configuration types for the solver service.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML server configuration file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_index_page() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("app.log"))
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings for the HTTP service.
///
/// Every field has a default, so an empty YAML document is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server listens on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// HTML page served at `/`.
    #[serde(default = "default_index_page")]
    pub index_page: PathBuf,
    /// File that log output is appended to. `null` logs to stdout.
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
    /// Default log filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ServerConfig {
    /// Returns the path of the index page.
    pub fn index_page(&self) -> &Path {
        &self.index_page
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            index_page: default_index_page(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}
