//! Core data models for the promotion statistics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bracket;
mod derived;
mod employee;
mod report;
mod statistics_run;

pub use bracket::{AgeBracket, SeniorityBracket};
pub use derived::DerivedEmployee;
pub use employee::{DATE_FORMAT, EmployeeRecord, EmployeeRow};
pub use report::{
    DetailedAnalysis, GroupStat, PositionPromotion, Report, TopPerformer, percentage,
};
pub use statistics_run::{AuditStep, AuditTrace, AuditWarning, StatisticsRun};
