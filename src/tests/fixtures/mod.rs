// Shared test fixtures, compiled into the crate only during tests.

pub mod employees;
pub mod promotion_eligibility;
