//! HTTP API module for the promotion statistics service.
//!
//! This module provides the read-only REST endpoints: the statistics report
//! and the raw employee listing.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::StatisticsQuery;
pub use response::{
    ApiError, ApiErrorResponse, EmployeeListing, EmployeesResponse, StatisticsResponse,
};
pub use state::AppState;
