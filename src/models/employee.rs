//! Employee record model and its storage-shaped row.
//!
//! [`EmployeeRow`] is what the storage collaborator hands over (dates still
//! as text, columns named as in the `employees` table). [`EmployeeRecord`] is
//! the typed snapshot item consumed by the statistics engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The calendar date format used by the storage layer.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One immutable employee record from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    /// Externally assigned identifier. Uniqueness is not enforced here.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The employee's date of birth.
    pub birth_date: NaiveDate,
    /// Date of the first appointment in the service.
    pub first_appointment_date: NaiveDate,
    /// Date of appointment to the current position.
    pub current_appointment_date: NaiveDate,
    /// Position label (open set).
    pub position: String,
    /// Grade in the range 1..=12, validated upstream.
    pub grade: u8,
    /// Points earned for seniority in position.
    pub position_seniority_points: Decimal,
    /// Points awarded by the director.
    pub director_points: Decimal,
    /// Points earned through training.
    pub training_points: Decimal,
}

impl EmployeeRecord {
    /// Returns the sum of the three point components, or `None` if the sum
    /// does not fit in a [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// use promotion_stats::models::EmployeeRecord;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     id: "EMP-001".to_string(),
    ///     name: "Amina Benali".to_string(),
    ///     birth_date: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
    ///     first_appointment_date: NaiveDate::from_ymd_opt(2008, 9, 1).unwrap(),
    ///     current_appointment_date: NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(),
    ///     position: "Engineer".to_string(),
    ///     grade: 7,
    ///     position_seniority_points: Decimal::new(125, 1),
    ///     director_points: Decimal::new(18, 0),
    ///     training_points: Decimal::new(425, 2),
    /// };
    /// assert_eq!(record.composite_score(), Some(Decimal::new(3475, 2)));
    /// ```
    pub fn composite_score(&self) -> Option<Decimal> {
        self.position_seniority_points
            .checked_add(self.director_points)?
            .checked_add(self.training_points)
    }
}

/// An employee row as delivered by the storage layer.
///
/// Dates are still text; points may be JSON numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Birth date as `YYYY-MM-DD`.
    pub birth_date: String,
    /// First appointment date as `YYYY-MM-DD`.
    pub first_appointment_date: String,
    /// Current appointment date as `YYYY-MM-DD`.
    pub current_appointment_date: String,
    /// Position label.
    pub position: String,
    /// Grade column.
    pub degree: u8,
    /// Seniority-in-position points.
    pub position_seniority_points: Decimal,
    /// Director points.
    pub director_points: Decimal,
    /// Training points.
    pub training_points: Decimal,
}

fn parse_date(employee_id: &str, field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        EngineError::data_integrity(
            employee_id,
            field,
            format!("not a calendar date: '{}' ({})", value, e),
        )
    })
}

impl TryFrom<EmployeeRow> for EmployeeRecord {
    type Error = EngineError;

    fn try_from(row: EmployeeRow) -> EngineResult<Self> {
        let birth_date = parse_date(&row.id, "birth_date", &row.birth_date)?;
        let first_appointment_date =
            parse_date(&row.id, "first_appointment_date", &row.first_appointment_date)?;
        let current_appointment_date = parse_date(
            &row.id,
            "current_appointment_date",
            &row.current_appointment_date,
        )?;

        Ok(EmployeeRecord {
            id: row.id,
            name: row.name,
            birth_date,
            first_appointment_date,
            current_appointment_date,
            position: row.position,
            grade: row.degree,
            position_seniority_points: row.position_seniority_points,
            director_points: row.director_points,
            training_points: row.training_points,
        })
    }
}
