// Ports define what the employee core needs from the outside world, without implementing it.
//
// Purpose
// - EmployeeRepository: course and employee lookup plus persistence.
// - PromotionEligibility: the external service deciding whether someone may be promoted.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory repository adapter has an offline switch for failure paths.
// - Test doubles for eligibility live in the crate's test fixtures.

use crate::modules::employees::core::course::Course;
use crate::modules::employees::core::employee::{ExternalEmployee, InternalEmployee};
use crate::shared::core::primitives::{CourseId, EmployeeId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>, RepositoryError>;

    /// Courses in the order of `course_ids`; unknown ids are skipped.
    async fn get_courses(&self, course_ids: &[CourseId]) -> Result<Vec<Course>, RepositoryError>;

    async fn get_obligatory_courses(&self) -> Result<Vec<Course>, RepositoryError>;

    async fn get_internal_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError>;

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError>;

    /// Inserts or replaces the employee.
    async fn save_internal_employee(&self, employee: &InternalEmployee) -> Result<(), RepositoryError>;

    async fn save_external_employee(&self, employee: &ExternalEmployee) -> Result<(), RepositoryError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromotionEligibilityCheckError {
    #[error("eligibility service unreachable: {0}")]
    Transport(String),

    #[error("eligibility service answered with status {0}")]
    UnexpectedStatus(u16),

    #[error("eligibility response malformed: {0}")]
    MalformedResponse(String),

    #[error("eligibility check timed out after {0} ms")]
    Timeout(u128),
}

#[async_trait]
pub trait PromotionEligibility: Send + Sync {
    async fn check(&self, employee_id: EmployeeId) -> Result<bool, PromotionEligibilityCheckError>;
}
