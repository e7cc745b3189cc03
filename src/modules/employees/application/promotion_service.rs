// Promotion service decides promotions through the external eligibility service.
//
// Responsibilities
// - Ask the eligibility service whether an internal employee may be promoted.
// - On a positive answer, bump the job level by one and persist the employee.
//
// Boundaries
// - The eligibility call is bounded by a timeout; a slow service counts as a failed check.
// - Nothing is changed or saved when the check fails, answers false or the save fails.

use crate::modules::employees::application::errors::ApplicationError;
use crate::modules::employees::core::employee::InternalEmployee;
use crate::modules::employees::core::ports::{
    EmployeeRepository, PromotionEligibility, PromotionEligibilityCheckError,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_ELIGIBILITY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PromotionService<TRepository, TEligibility>
where
    TRepository: EmployeeRepository + ?Sized,
    TEligibility: PromotionEligibility + ?Sized,
{
    repository: Arc<TRepository>,
    eligibility: Arc<TEligibility>,
    timeout: Duration,
}

impl<TRepository, TEligibility> PromotionService<TRepository, TEligibility>
where
    TRepository: EmployeeRepository + ?Sized,
    TEligibility: PromotionEligibility + ?Sized,
{
    pub fn new(repository: Arc<TRepository>, eligibility: Arc<TEligibility>) -> Self {
        Self {
            repository,
            eligibility,
            timeout: DEFAULT_ELIGIBILITY_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns whether the employee was promoted.
    pub async fn promote_internal_employee(
        &self,
        employee: &mut InternalEmployee,
    ) -> Result<bool, ApplicationError> {
        let employee_id = employee.id;

        let eligible = match tokio::time::timeout(self.timeout, self.eligibility.check(employee_id)).await {
            Ok(answer) => answer,
            Err(_) => Err(PromotionEligibilityCheckError::Timeout(self.timeout.as_millis())),
        }
        .map_err(|source| {
            warn!(employee_id = %employee_id, error = %source, "promotion eligibility check failed");
            ApplicationError::PromotionEligibility {
                employee_id,
                source,
            }
        })?;

        if !eligible {
            info!(employee_id = %employee_id, "employee not eligible for promotion");
            return Ok(false);
        }

        let mut updated = employee.clone();
        updated.promote();

        self.repository
            .save_internal_employee(&updated)
            .await
            .map_err(ApplicationError::repository("promote_internal_employee", employee_id))?;

        info!(employee_id = %employee_id, job_level = updated.job_level, "employee promoted");
        *employee = updated;
        Ok(true)
    }
}
