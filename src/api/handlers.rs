//! HTTP request handlers for the solver API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::warn;
use uuid::Uuid;

use crate::solver::solve_str;

use super::request::SolutionQuery;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/solution", get(solution_handler))
        .with_state(state)
}

/// Handler for GET /solution.
///
/// Parses `equation1` and `equation2` from the query string and returns the
/// solution as a JSON array, or a 400 with the error message as plain text.
async fn solution_handler(
    State(state): State<AppState>,
    query: Result<Query<SolutionQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string rejected"
            );
            return ApiError::bad_request(rejection.body_text()).into_response();
        }
    };

    let log = state.log();
    log.received(correlation_id, &query.equation1, &query.equation2);

    let start_time = Instant::now();
    match solve_str(&query.equation1, &query.equation2) {
        Ok(solution) => {
            log.solved(correlation_id, &solution, start_time.elapsed());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(solution),
            )
                .into_response()
        }
        Err(err) => {
            log.rejected(correlation_id, &err);
            ApiError::from(&err).into_response()
        }
    }
}

/// Handler for GET /.
///
/// Serves the configured index page.
async fn index_handler(State(state): State<AppState>) -> Response {
    let path = state.config().index_page();
    match tokio::fs::read_to_string(path).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Index page unavailable"
            );
            ApiError::new(StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}
