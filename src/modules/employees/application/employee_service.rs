// Employee service orchestrates the employee lifecycle use cases.
//
// Responsibilities
// - Create internal employees through the factory and enroll them in every obligatory course.
// - Record course attendance and keep the suggested bonus in line with it.
// - Approve raises against the raise policy.
// - Raise the EmployeeIsAbsent notification to registered listeners.
//
// Consistency
// - Mutations are applied to a copy, the copy is persisted, and only then is the caller's
//   employee replaced. A failed or cancelled save leaves the caller's value as it was.

use crate::modules::employees::application::errors::ApplicationError;
use crate::modules::employees::core::course::Course;
use crate::modules::employees::core::employee::{ExternalEmployee, InternalEmployee};
use crate::modules::employees::core::events::EmployeeIsAbsent;
use crate::modules::employees::core::factory::EmployeeFactory;
use crate::modules::employees::core::policy::EmployeePolicy;
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::shared::core::primitives::{CourseId, EmployeeId};
use crate::shared::infrastructure::listeners::{EventListeners, ListenerId};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct EmployeeService<TRepository>
where
    TRepository: EmployeeRepository + ?Sized,
{
    repository: Arc<TRepository>,
    factory: Arc<EmployeeFactory>,
    policy: EmployeePolicy,
    absence_listeners: EventListeners<EmployeeService<TRepository>, EmployeeIsAbsent>,
}

impl<TRepository> EmployeeService<TRepository>
where
    TRepository: EmployeeRepository + ?Sized,
{
    pub fn new(
        repository: Arc<TRepository>,
        factory: Arc<EmployeeFactory>,
        policy: EmployeePolicy,
    ) -> Self {
        Self {
            repository,
            factory,
            policy,
            absence_listeners: EventListeners::new(),
        }
    }

    pub fn policy(&self) -> &EmployeePolicy {
        &self.policy
    }

    pub async fn create_internal_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<InternalEmployee, ApplicationError> {
        let mut employee = self.factory.create_internal_employee(first_name, last_name);
        let employee_id = employee.id;

        let obligatory_courses = self
            .repository
            .get_obligatory_courses()
            .await
            .map_err(ApplicationError::repository("create_internal_employee", employee_id))?;

        employee.attended_courses.extend(obligatory_courses);
        employee.recalculate_suggested_bonus(&self.policy);

        self.repository
            .save_internal_employee(&employee)
            .await
            .map_err(ApplicationError::repository("create_internal_employee", employee_id))?;

        info!(
            employee_id = %employee_id,
            attended_courses = employee.attended_courses.len(),
            "internal employee created"
        );
        Ok(employee)
    }

    pub async fn create_external_employee(
        &self,
        first_name: &str,
        last_name: &str,
        company_name: &str,
    ) -> Result<ExternalEmployee, ApplicationError> {
        let employee = self
            .factory
            .create_external_employee(first_name, last_name, company_name);

        self.repository
            .save_external_employee(&employee)
            .await
            .map_err(ApplicationError::repository("create_external_employee", employee.id))?;

        info!(employee_id = %employee.id, company = %employee.company, "external employee created");
        Ok(employee)
    }

    /// Appends the course, recalculates the suggested bonus and persists the employee.
    pub async fn attend_course(
        &self,
        employee: &mut InternalEmployee,
        course: Course,
    ) -> Result<(), ApplicationError> {
        let course_id = course.id;
        let mut updated = employee.clone();
        updated.attend_course(course, &self.policy);

        self.repository
            .save_internal_employee(&updated)
            .await
            .map_err(ApplicationError::repository("attend_course", employee.id))?;

        debug!(
            employee_id = %updated.id,
            course_id = %course_id,
            suggested_bonus = %updated.suggested_bonus,
            "course attended"
        );
        *employee = updated;
        Ok(())
    }

    /// Rejects amounts below the policy minimum before anything is touched.
    pub async fn give_raise(
        &self,
        employee: &mut InternalEmployee,
        raise_amount: Decimal,
    ) -> Result<(), ApplicationError> {
        let mut updated = employee.clone();
        if let Err(source) = updated.give_raise(raise_amount, &self.policy) {
            warn!(employee_id = %employee.id, raise_amount = %raise_amount, "raise rejected");
            return Err(ApplicationError::InvalidRaise {
                employee_id: employee.id,
                source,
            });
        }

        self.repository
            .save_internal_employee(&updated)
            .await
            .map_err(ApplicationError::repository("give_raise", employee.id))?;

        info!(
            employee_id = %updated.id,
            raise_amount = %raise_amount,
            salary = %updated.salary,
            "raise given"
        );
        *employee = updated;
        Ok(())
    }

    /// Notifies every absence listener on the calling task before returning.
    pub fn notify_of_absence(&self, employee: &InternalEmployee) {
        let event = EmployeeIsAbsent::new(employee.id);
        let delivered = self.absence_listeners.emit(self, &event);
        debug!(employee_id = %employee.id, listeners = delivered, "absence notified");
    }

    pub fn subscribe_to_absence(
        &self,
        listener: impl Fn(&Self, &EmployeeIsAbsent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.absence_listeners.subscribe(listener)
    }

    pub fn unsubscribe_from_absence(&self, id: ListenerId) -> bool {
        self.absence_listeners.unsubscribe(id)
    }

    pub async fn fetch_internal_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Option<InternalEmployee>, ApplicationError> {
        self.repository
            .get_internal_employee(employee_id)
            .await
            .map_err(ApplicationError::repository("fetch_internal_employee", employee_id))
    }

    pub async fn fetch_internal_employees(&self) -> Result<Vec<InternalEmployee>, ApplicationError> {
        self.repository
            .get_internal_employees()
            .await
            .map_err(ApplicationError::lookup("fetch_internal_employees"))
    }

    pub async fn fetch_course(&self, course_id: CourseId) -> Result<Option<Course>, ApplicationError> {
        self.repository
            .get_course(course_id)
            .await
            .map_err(ApplicationError::lookup("fetch_course"))
    }
}
