//! HTTP request handlers for the promotion statistics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{generate_statistics, today};
use crate::error::EngineResult;
use crate::models::EmployeeRecord;
use crate::snapshot::SnapshotSource;

use super::request::StatisticsQuery;
use super::response::{
    ApiError, ApiErrorResponse, EmployeeListing, EmployeesResponse, StatisticsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/stats", get(statistics_handler))
        .route("/employees", get(employees_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Handler for GET /stats endpoint.
///
/// Loads a fresh snapshot and returns its statistics report for the
/// requested evaluation date, or today when none is given.
async fn statistics_handler(
    State(state): State<AppState>,
    query: Result<Query<StatisticsQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statistics request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid query string"
            );
            return error_response(ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_query(body_text),
            ));
        }
    };

    let evaluation_date = query.evaluation_date.unwrap_or_else(today);
    let source = state.snapshot();
    let start_time = Instant::now();

    let outcome = tokio::task::spawn_blocking(move || {
        generate_statistics(source.as_ref(), evaluation_date)
    })
    .await;

    match outcome {
        Ok(Ok(run)) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %run.calculation_id,
                %evaluation_date,
                total = run.report.total_employees,
                duration_us = start_time.elapsed().as_micros(),
                "Statistics request completed"
            );
            json_response(StatusCode::OK, StatisticsResponse::from(run))
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Statistics request failed"
            );
            error_response(err.into())
        }
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Statistics task aborted"
            );
            error_response(ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(),
            ))
        }
    }
}

/// Handler for GET /employees endpoint.
///
/// Returns the raw roster ordered by position, grade, then name.
async fn employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee listing request");

    let source = state.snapshot();
    let outcome = tokio::task::spawn_blocking(move || list_employees(source.as_ref())).await;

    match outcome {
        Ok(Ok(listing)) => {
            info!(
                correlation_id = %correlation_id,
                count = listing.len(),
                "Employee listing completed"
            );
            json_response(
                StatusCode::OK,
                EmployeesResponse {
                    success: true,
                    count: listing.len(),
                    data: listing,
                },
            )
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee listing failed"
            );
            error_response(err.into())
        }
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Employee listing task aborted"
            );
            error_response(ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(),
            ))
        }
    }
}

/// Loads the roster and orders it for display.
fn list_employees(source: &dyn SnapshotSource) -> EngineResult<Vec<EmployeeListing>> {
    let mut records: Vec<EmployeeRecord> = source.load()?;
    records.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(a.grade.cmp(&b.grade))
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(records.into_iter().map(EmployeeListing::from).collect())
}
