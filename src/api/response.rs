//! Response types for the promotion statistics API.
//!
//! This module defines the success envelopes, the error response structure
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{EmployeeRecord, Report, StatisticsRun};

/// Body of a successful `GET /stats` response.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier of the statistics run.
    pub calculation_id: Uuid,
    /// The date the snapshot was evaluated against.
    pub evaluation_date: NaiveDate,
    /// The statistics payload.
    pub data: Report,
}

impl From<StatisticsRun> for StatisticsResponse {
    fn from(run: StatisticsRun) -> Self {
        Self {
            success: true,
            calculation_id: run.calculation_id,
            evaluation_date: run.evaluation_date,
            data: run.report,
        }
    }
}

/// One roster entry in a `GET /employees` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListing {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// First appointment date.
    pub first_appointment_date: NaiveDate,
    /// Current appointment date.
    pub current_appointment_date: NaiveDate,
    /// Position label.
    pub position: String,
    /// Grade.
    pub degree: u8,
    /// Seniority-in-position points.
    #[serde(with = "rust_decimal::serde::float")]
    pub position_seniority_points: Decimal,
    /// Director points.
    #[serde(with = "rust_decimal::serde::float")]
    pub director_points: Decimal,
    /// Training points.
    #[serde(with = "rust_decimal::serde::float")]
    pub training_points: Decimal,
}

impl From<EmployeeRecord> for EmployeeListing {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            birth_date: record.birth_date,
            first_appointment_date: record.first_appointment_date,
            current_appointment_date: record.current_appointment_date,
            position: record.position,
            degree: record.grade,
            position_seniority_points: record.position_seniority_points,
            director_points: record.director_points,
            training_points: record.training_points,
        }
    }
}

/// Body of a successful `GET /employees` response.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeesResponse {
    /// Always `true`.
    pub success: bool,
    /// Number of employees listed.
    pub count: usize,
    /// Employees ordered by position, grade, then name.
    pub data: Vec<EmployeeListing>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query parameter error response.
    pub fn invalid_query(details: impl Into<String>) -> Self {
        Self::with_details("INVALID_QUERY", "Invalid query parameters", details)
    }

    /// Creates an internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "The request could not be completed")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("CONFIG_ERROR", "Configuration error"),
                )
            }
            EngineError::SnapshotUnavailable { .. } => ApiErrorResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("SNAPSHOT_UNAVAILABLE", "Employee records are unavailable"),
            ),
            EngineError::SnapshotMalformed { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("SNAPSHOT_MALFORMED", "Employee records could not be read"),
            ),
            EngineError::DataIntegrity { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new(
                    "DATA_INTEGRITY_ERROR",
                    "Employee records contain invalid data",
                ),
            ),
        }
    }
}
