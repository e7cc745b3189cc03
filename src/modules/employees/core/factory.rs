// Factory for new employees.
//
// Purpose
// - Hide the internal/external choice from callers and apply creation-time defaults.
//
// Defaults for internal employees
// - 0 years in service, job level 1, no notice given.
// - Salary drawn uniformly from the policy's starting range, bounds included.
//
// Randomness
// - The only non-deterministic input of the employee context. The generator is owned by
//   the factory and can be seeded so tests and replays get the same salaries.

use crate::modules::employees::core::employee::{Employee, ExternalEmployee, InternalEmployee};
use crate::modules::employees::core::policy::SalaryRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::sync::{Mutex, PoisonError};

const STARTING_JOB_LEVEL: u32 = 1;

pub struct EmployeeFactory {
    salary_range: SalaryRange,
    rng: Mutex<StdRng>,
}

impl Default for EmployeeFactory {
    fn default() -> Self {
        Self::new(SalaryRange::default(), None)
    }
}

impl EmployeeFactory {
    pub fn new(salary_range: SalaryRange, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(salary_range, rng)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SalaryRange::default(), Some(seed))
    }

    pub fn with_rng(salary_range: SalaryRange, rng: StdRng) -> Self {
        Self {
            salary_range,
            rng: Mutex::new(rng),
        }
    }

    pub fn create_employee(
        &self,
        first_name: &str,
        last_name: &str,
        company_name: &str,
        is_external: bool,
    ) -> Employee {
        if is_external {
            Employee::External(self.create_external_employee(first_name, last_name, company_name))
        } else {
            Employee::Internal(self.create_internal_employee(first_name, last_name))
        }
    }

    pub fn create_internal_employee(&self, first_name: &str, last_name: &str) -> InternalEmployee {
        InternalEmployee::new(
            first_name,
            last_name,
            0,
            self.starting_salary(),
            false,
            STARTING_JOB_LEVEL,
        )
    }

    pub fn create_external_employee(
        &self,
        first_name: &str,
        last_name: &str,
        company_name: &str,
    ) -> ExternalEmployee {
        ExternalEmployee::new(first_name, last_name, company_name)
    }

    fn starting_salary(&self) -> Decimal {
        let SalaryRange { min, max } = self.salary_range;
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Decimal::from(rng.gen_range(low..=high))
    }
}
