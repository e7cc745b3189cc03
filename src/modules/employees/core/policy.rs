// Business policy values for the employee context.
//
// Purpose
// - Hold the tunable numbers behind raises, bonuses and starting salaries in one value
//   that is passed explicitly to the factory and the services.
//
// Defaults
// - A raise must be at least 100. Anything lower (10, 50, 99.99) is rejected.
// - Suggested bonus is years in service * attended courses * 100.
// - Starting salaries are drawn from 2500..=3500.
//
// Boundaries
// - Pure values and pure functions. No input or output.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MINIMUM_RAISE: u32 = 100;
pub const DEFAULT_BONUS_PER_COURSE_YEAR: u32 = 100;
pub const DEFAULT_STARTING_SALARY_MIN: u32 = 2500;
pub const DEFAULT_STARTING_SALARY_MAX: u32 = 3500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaiseError {
    #[error("invalid raise amount {amount}: raise must be at least {minimum}")]
    InvalidRaiseAmount { amount: Decimal, minimum: Decimal },

    #[error("raise of {amount} on a salary of {salary} exceeds the representable salary")]
    SalaryOverflow { salary: Decimal, amount: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_STARTING_SALARY_MIN,
            max: DEFAULT_STARTING_SALARY_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePolicy {
    pub minimum_raise: Decimal,
    pub bonus_per_course_year: Decimal,
    pub starting_salary: SalaryRange,
}

impl Default for EmployeePolicy {
    fn default() -> Self {
        Self {
            minimum_raise: Decimal::from(DEFAULT_MINIMUM_RAISE),
            bonus_per_course_year: Decimal::from(DEFAULT_BONUS_PER_COURSE_YEAR),
            starting_salary: SalaryRange::default(),
        }
    }
}

impl EmployeePolicy {
    /// Non-positive amounts are rejected whatever the configured minimum.
    pub fn validate_raise(&self, amount: Decimal) -> Result<(), RaiseError> {
        if amount <= Decimal::ZERO || amount < self.minimum_raise {
            return Err(RaiseError::InvalidRaiseAmount {
                amount,
                minimum: self.minimum_raise,
            });
        }
        Ok(())
    }

    pub fn is_minimum_raise(&self, amount: Decimal) -> bool {
        amount == self.minimum_raise
    }

    pub fn suggested_bonus(&self, years_in_service: u32, attended_courses: usize) -> Decimal {
        Decimal::from(years_in_service) * Decimal::from(attended_courses) * self.bonus_per_course_year
    }
}
