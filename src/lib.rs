//! Promotion eligibility and statistics engine
//!
//! This crate loads a snapshot of employee records, derives each employee's
//! age, seniority and time in position at an evaluation date, selects the
//! promotion cohort from the eligible employees and aggregates the result
//! into a statistics report served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod snapshot;
