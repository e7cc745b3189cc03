// Employee entities.
//
// Purpose
// - Model the two kinds of employees as explicit variants of one sum type.
//
// Structure
// - InternalEmployee: on payroll, attends courses, has a job level and a suggested bonus.
// - ExternalEmployee: contracted through a company; no courses, no job level.
// - Employee: the tagged union returned by the factory.
//
// Invariants
// - Salary never goes negative; it only grows through approved raises.
// - After any course attendance, suggested_bonus == years * attended courses * bonus rate.
// - Job level only changes through promotion.

use crate::modules::employees::core::course::Course;
use crate::modules::employees::core::policy::{EmployeePolicy, RaiseError};
use crate::shared::core::primitives::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalEmployee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Decimal,
    pub years_in_service: u32,
    pub job_level: u32,
    pub attended_courses: Vec<Course>,
    pub suggested_bonus: Decimal,
    pub has_given_notice: bool,
    pub minimum_raise_given: bool,
}

impl InternalEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        years_in_service: u32,
        salary: Decimal,
        has_given_notice: bool,
        job_level: u32,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            years_in_service,
            job_level,
            attended_courses: Vec::new(),
            suggested_bonus: Decimal::ZERO,
            has_given_notice,
            minimum_raise_given: false,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Appends the course and recalculates the suggested bonus.
    /// Attending the same course twice counts it twice.
    pub fn attend_course(&mut self, course: Course, policy: &EmployeePolicy) {
        self.attended_courses.push(course);
        self.recalculate_suggested_bonus(policy);
    }

    pub fn recalculate_suggested_bonus(&mut self, policy: &EmployeePolicy) {
        self.suggested_bonus =
            policy.suggested_bonus(self.years_in_service, self.attended_courses.len());
    }

    /// Validates the amount first; on rejection nothing is changed.
    pub fn give_raise(&mut self, amount: Decimal, policy: &EmployeePolicy) -> Result<(), RaiseError> {
        policy.validate_raise(amount)?;
        let salary = self
            .salary
            .checked_add(amount)
            .ok_or(RaiseError::SalaryOverflow {
                salary: self.salary,
                amount,
            })?;
        self.minimum_raise_given = policy.is_minimum_raise(amount);
        self.salary = salary;
        Ok(())
    }

    pub fn promote(&mut self) {
        self.job_level += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEmployee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: Decimal,
    pub company: String,
}

impl ExternalEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary: Decimal::ZERO,
            company: company.into(),
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Employee {
    Internal(InternalEmployee),
    External(ExternalEmployee),
}

impl Employee {
    pub fn id(&self) -> EmployeeId {
        match self {
            Employee::Internal(employee) => employee.id,
            Employee::External(employee) => employee.id,
        }
    }

    pub fn first_name(&self) -> &str {
        match self {
            Employee::Internal(employee) => &employee.first_name,
            Employee::External(employee) => &employee.first_name,
        }
    }

    pub fn last_name(&self) -> &str {
        match self {
            Employee::Internal(employee) => &employee.last_name,
            Employee::External(employee) => &employee.last_name,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(self.first_name(), self.last_name())
    }

    pub fn salary(&self) -> Decimal {
        match self {
            Employee::Internal(employee) => employee.salary,
            Employee::External(employee) => employee.salary,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Employee::External(_))
    }

    pub fn into_internal(self) -> Option<InternalEmployee> {
        match self {
            Employee::Internal(employee) => Some(employee),
            Employee::External(_) => None,
        }
    }

    pub fn into_external(self) -> Option<ExternalEmployee> {
        match self {
            Employee::External(employee) => Some(employee),
            Employee::Internal(_) => None,
        }
    }
}
