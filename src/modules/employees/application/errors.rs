use crate::modules::employees::core::policy::RaiseError;
use crate::modules::employees::core::ports::{PromotionEligibilityCheckError, RepositoryError};
use crate::shared::core::primitives::{CourseId, EmployeeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{operation} failed for employee {employee_id}: {source}")]
    Repository {
        operation: &'static str,
        employee_id: EmployeeId,
        #[source]
        source: RepositoryError,
    },

    #[error("raise rejected for employee {employee_id}: {source}")]
    InvalidRaise {
        employee_id: EmployeeId,
        #[source]
        source: RaiseError,
    },

    #[error("promotion eligibility check failed for employee {employee_id}: {source}")]
    PromotionEligibility {
        employee_id: EmployeeId,
        #[source]
        source: PromotionEligibilityCheckError,
    },

    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("{operation} failed: {source}")]
    Lookup {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApplicationError {
    pub fn repository(operation: &'static str, employee_id: EmployeeId) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Repository {
            operation,
            employee_id,
            source,
        }
    }

    pub fn lookup(operation: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Lookup { operation, source }
    }
}
