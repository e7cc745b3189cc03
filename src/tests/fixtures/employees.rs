// Shared test fixture for internal employees.
//
// Defaults mirror the canonical test subject: Brooklyn Cannon, 5 years in service,
// salary 3000, no notice given, job level 1, no courses attended yet.

use crate::modules::employees::core::course::Course;
use crate::modules::employees::core::employee::InternalEmployee;
use crate::shared::core::primitives::EmployeeId;
use rust_decimal::Decimal;

pub struct InternalEmployeeBuilder {
    inner: InternalEmployee,
}

impl Default for InternalEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl InternalEmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: InternalEmployee::new("Brooklyn", "Cannon", 5, Decimal::from(3000), false, 1),
        }
    }

    pub fn id(mut self, v: EmployeeId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn years_in_service(mut self, v: u32) -> Self {
        self.inner.years_in_service = v;
        self
    }

    pub fn salary(mut self, v: i64) -> Self {
        self.inner.salary = Decimal::from(v);
        self
    }

    pub fn job_level(mut self, v: u32) -> Self {
        self.inner.job_level = v;
        self
    }

    pub fn attended_courses(mut self, v: Vec<Course>) -> Self {
        self.inner.attended_courses = v;
        self
    }

    pub fn build(self) -> InternalEmployee {
        self.inner
    }
}

#[cfg(test)]
mod internal_employee_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_builds_the_canonical_test_subject() {
        let employee = InternalEmployeeBuilder::default().build();
        assert_eq!(employee.full_name(), "Brooklyn Cannon");
        assert_eq!(employee.years_in_service, 5);
        assert_eq!(employee.salary, Decimal::from(3000));
        assert_eq!(employee.job_level, 1);
        assert!(employee.attended_courses.is_empty());
    }

    #[rstest]
    fn setters_override_fields() {
        let id = EmployeeId::new();
        let employee = InternalEmployeeBuilder::new()
            .id(id)
            .first_name("Megan")
            .last_name("Jones")
            .years_in_service(2)
            .salary(2800)
            .job_level(4)
            .attended_courses(vec![Course::new("Company Introduction")])
            .build();

        assert_eq!(employee.id, id);
        assert_eq!(employee.full_name(), "Megan Jones");
        assert_eq!(employee.years_in_service, 2);
        assert_eq!(employee.salary, Decimal::from(2800));
        assert_eq!(employee.job_level, 4);
        assert_eq!(employee.attended_courses.len(), 1);
    }
}
