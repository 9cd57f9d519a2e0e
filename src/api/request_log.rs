//! Request logging collaborator.
//!
//! Handlers report what they receive and produce through a [`RequestLog`]
//! held in the application state. The default implementation emits `tracing`
//! events; the subscriber installed by the binary decides where they go.

use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::Solution;

/// Receives request lifecycle events from the HTTP handlers.
pub trait RequestLog: Send + Sync {
    /// A solve request arrived with the given raw equations.
    fn received(&self, correlation_id: Uuid, equation1: &str, equation2: &str);

    /// The request produced a solution.
    fn solved(&self, correlation_id: Uuid, solution: &Solution, elapsed: Duration);

    /// The request was rejected.
    fn rejected(&self, correlation_id: Uuid, error: &EngineError);
}

/// [`RequestLog`] that writes structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn received(&self, correlation_id: Uuid, equation1: &str, equation2: &str) {
        info!(
            correlation_id = %correlation_id,
            equation1,
            equation2,
            "Processing solve request"
        );
    }

    fn solved(&self, correlation_id: Uuid, solution: &Solution, elapsed: Duration) {
        let [first, second] = solution.values();
        info!(
            correlation_id = %correlation_id,
            first_variable = %first.variable,
            first_value = first.value,
            second_variable = %second.variable,
            second_value = second.value,
            duration_us = elapsed.as_micros(),
            "Solve completed successfully"
        );
    }

    fn rejected(&self, correlation_id: Uuid, error: &EngineError) {
        match error {
            EngineError::Parse(parse_error) => warn!(
                correlation_id = %correlation_id,
                input = parse_error.input(),
                reason = %parse_error.kind(),
                "Equation rejected"
            ),
            other => warn!(
                correlation_id = %correlation_id,
                error = %other,
                "Solve failed"
            ),
        }
    }
}
