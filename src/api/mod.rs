//! HTTP API module for the equation solver.
//!
//! This module provides the `GET /solution` endpoint that solves two
//! equations passed as query parameters, and `GET /` serving the index page.

mod handlers;
mod request;
mod request_log;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SolutionQuery;
pub use request_log::{RequestLog, TracingRequestLog};
pub use response::ApiError;
pub use state::AppState;
