use crate::modules::employees::adapters::outbound::employee_repository_in_memory::InMemoryEmployeeRepository;
use crate::modules::employees::adapters::outbound::promotion_eligibility_http::HttpPromotionEligibility;
use crate::modules::employees::application::employee_service::EmployeeService;
use crate::modules::employees::application::promotion_service::PromotionService;
use crate::modules::employees::core::factory::EmployeeFactory;
use crate::modules::employees::core::ports::{
    EmployeeRepository, PromotionEligibility, PromotionEligibilityCheckError,
};
use crate::shell::config::AppConfig;
use std::sync::Arc;

pub type SharedEmployeeService = EmployeeService<dyn EmployeeRepository>;
pub type SharedPromotionService = PromotionService<dyn EmployeeRepository, dyn PromotionEligibility>;

#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<SharedEmployeeService>,
    pub promotion_service: Arc<SharedPromotionService>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        repository: Arc<dyn EmployeeRepository>,
        eligibility: Arc<dyn PromotionEligibility>,
    ) -> Self {
        let policy = config.employees.policy.clone();
        let factory = Arc::new(EmployeeFactory::new(
            policy.starting_salary,
            config.employees.salary_seed,
        ));

        let employee_service = Arc::new(EmployeeService::new(repository.clone(), factory, policy));
        let promotion_service = Arc::new(
            PromotionService::new(repository, eligibility)
                .with_timeout(config.promotion_eligibility.timeout),
        );

        Self {
            employee_service,
            promotion_service,
        }
    }

    /// Seeded in-memory storage plus the HTTP eligibility client.
    pub fn in_memory(config: &AppConfig) -> Result<Self, PromotionEligibilityCheckError> {
        let repository: Arc<dyn EmployeeRepository> =
            Arc::new(InMemoryEmployeeRepository::with_seed_data());
        let eligibility: Arc<dyn PromotionEligibility> = Arc::new(HttpPromotionEligibility::new(
            config.promotion_eligibility.base_url.clone(),
            config.promotion_eligibility.timeout,
        )?);

        Ok(Self::new(config, repository, eligibility))
    }
}
