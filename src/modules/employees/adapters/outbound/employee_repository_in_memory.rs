// In memory implementation of the EmployeeRepository port.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Keep courses, the obligatory course list and employees in memory.
// - Hand out stored courses with `is_new == false`, the way a real store materializes them.
// - Count writes so tests can assert that nothing was persisted.
// - Fail every call while toggled offline.

use crate::modules::employees::core::course::Course;
use crate::modules::employees::core::employee::{ExternalEmployee, InternalEmployee};
use crate::modules::employees::core::policy::EmployeePolicy;
use crate::modules::employees::core::ports::{EmployeeRepository, RepositoryError};
use crate::shared::core::primitives::{CourseId, EmployeeId};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

pub const COMPANY_INTRODUCTION_ID: CourseId =
    CourseId::from_u128(0x37e03ca7_c730_4351_834c_b66f280cdb01);
pub const RESPECTING_YOUR_COLLEAGUES_ID: CourseId =
    CourseId::from_u128(0x1fd115cf_f44c_4982_86bc_a8fe2e4ff83e);
pub const DEALING_WITH_CUSTOMERS_101_ID: CourseId =
    CourseId::from_u128(0x844e14ce_c055_49e9_9610_855669c9859b);
pub const DEALING_WITH_CUSTOMERS_ADVANCED_ID: CourseId =
    CourseId::from_u128(0xd6e0e4b7_9365_4332_9b29_bb7bf09664a6);
pub const DISASTER_MANAGEMENT_101_ID: CourseId =
    CourseId::from_u128(0xcbf6db3b_c4ee_46aa_9457_5fa8aefef33a);

pub const MEGAN_JONES_ID: EmployeeId = EmployeeId::from_u128(0x72f2f5fe_e50c_4966_8420_d50258aefdcb);
pub const JAIMY_JOHNSON_ID: EmployeeId = EmployeeId::from_u128(0xf484ad8f_78eb_4c84_8de8_2b4c8b6d1ee5);
pub const ANNE_ADAMS_ID: EmployeeId = EmployeeId::from_u128(0x9a1f0b2c_5d4e_4f6a_8b7c_0d1e2f3a4b5c);

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    courses: RwLock<HashMap<CourseId, Course>>,
    obligatory_course_ids: RwLock<Vec<CourseId>>,
    internal_employees: RwLock<Vec<InternalEmployee>>,
    external_employees: RwLock<Vec<ExternalEmployee>>,
    saves: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference data set: two obligatory courses, three optional ones and three employees.
    pub fn with_seed_data() -> Self {
        let policy = EmployeePolicy::default();
        let company_introduction = Course::existing(COMPANY_INTRODUCTION_ID, "Company Introduction");
        let respecting_your_colleagues =
            Course::existing(RESPECTING_YOUR_COLLEAGUES_ID, "Respecting Your Colleagues");
        let dealing_with_customers =
            Course::existing(DEALING_WITH_CUSTOMERS_101_ID, "Dealing with Customers 101");

        let seeded = |id, first, last, years, salary: i64, notice, level, courses: &[&Course]| {
            let mut employee =
                InternalEmployee::new(first, last, years, Decimal::from(salary), notice, level);
            employee.id = id;
            employee.attended_courses = courses.iter().map(|course| (*course).clone()).collect();
            employee.recalculate_suggested_bonus(&policy);
            employee
        };

        let megan = seeded(
            MEGAN_JONES_ID,
            "Megan",
            "Jones",
            2,
            3000,
            false,
            2,
            &[&company_introduction, &respecting_your_colleagues],
        );
        let jaimy = seeded(
            JAIMY_JOHNSON_ID,
            "Jaimy",
            "Johnson",
            3,
            3400,
            true,
            1,
            &[&company_introduction],
        );
        let anne = seeded(
            ANNE_ADAMS_ID,
            "Anne",
            "Adams",
            3,
            4000,
            false,
            3,
            &[&company_introduction, &respecting_your_colleagues, &dealing_with_customers],
        );

        Self::new()
            .with_course(company_introduction, true)
            .with_course(respecting_your_colleagues, true)
            .with_course(dealing_with_customers, false)
            .with_course(
                Course::existing(DEALING_WITH_CUSTOMERS_ADVANCED_ID, "Dealing with Customers - Advanced"),
                false,
            )
            .with_course(
                Course::existing(DISASTER_MANAGEMENT_101_ID, "Disaster Management 101"),
                false,
            )
            .with_internal_employee(megan)
            .with_internal_employee(jaimy)
            .with_internal_employee(anne)
    }

    pub fn with_course(mut self, mut course: Course, obligatory: bool) -> Self {
        course.is_new = false;
        if obligatory {
            self.obligatory_course_ids.get_mut().push(course.id);
        }
        self.courses.get_mut().insert(course.id, course);
        self
    }

    pub fn with_internal_employee(mut self, employee: InternalEmployee) -> Self {
        upsert(self.internal_employees.get_mut(), stored(employee), |e| e.id);
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub async fn external_employees(&self) -> Vec<ExternalEmployee> {
        self.external_employees.read().await.clone()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Unavailable("Employee repository offline".into()));
        }
        Ok(())
    }
}

fn stored(mut employee: InternalEmployee) -> InternalEmployee {
    for course in &mut employee.attended_courses {
        course.is_new = false;
    }
    employee
}

fn upsert<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let wanted = key(&item);
    match items.iter_mut().find(|existing| key(existing) == wanted) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

#[async_trait::async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_course(&self, course_id: CourseId) -> Result<Option<Course>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.courses.read().await.get(&course_id).cloned())
    }

    async fn get_courses(&self, course_ids: &[CourseId]) -> Result<Vec<Course>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.courses.read().await;
        Ok(course_ids
            .iter()
            .filter_map(|id| guard.get(id).cloned())
            .collect())
    }

    async fn get_obligatory_courses(&self) -> Result<Vec<Course>, RepositoryError> {
        self.ensure_online()?;
        let ids = self.obligatory_course_ids.read().await.clone();
        self.get_courses(&ids).await
    }

    async fn get_internal_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .internal_employees
            .read()
            .await
            .iter()
            .find(|employee| employee.id == employee_id)
            .cloned())
    }

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.internal_employees.read().await.clone())
    }

    async fn save_internal_employee(&self, employee: &InternalEmployee) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.internal_employees.write().await;
        upsert(&mut *guard, stored(employee.clone()), |e| e.id);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn save_external_employee(&self, employee: &ExternalEmployee) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.external_employees.write().await;
        upsert(&mut *guard, employee.clone(), |e| e.id);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
