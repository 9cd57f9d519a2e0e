//! Configuration loading for the solver service.
//!
//! This module loads the HTTP server settings (listen address, index page,
//! log destination and level) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use equation_solver::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/server.yaml").unwrap();
//! println!("Serving {}", config.config().index_page().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServerConfig;
