//! Application state for the solver API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServerConfig;

use super::request_log::{RequestLog, TracingRequestLog};

/// Shared application state.
///
/// Holds the server configuration and the request log collaborator. Both
/// are immutable and shared behind `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    log: Arc<dyn RequestLog>,
}

impl AppState {
    /// Creates application state that logs through `tracing`.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_log(config, Arc::new(TracingRequestLog))
    }

    /// Creates application state with an explicit request log.
    pub fn with_log(config: ServerConfig, log: Arc<dyn RequestLog>) -> Self {
        Self {
            config: Arc::new(config),
            log,
        }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the request log.
    pub fn log(&self) -> &dyn RequestLog {
        self.log.as_ref()
    }
}
