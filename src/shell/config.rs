// Runtime configuration for the employee management service.
//
// Sources, in order of precedence
// - Process environment.
// - A `.env` file in the working directory (loaded by `AppConfig::load`).
// - Built in defaults.

use crate::modules::employees::core::policy::{
    DEFAULT_BONUS_PER_COURSE_YEAR, DEFAULT_MINIMUM_RAISE, DEFAULT_STARTING_SALARY_MAX,
    DEFAULT_STARTING_SALARY_MIN, EmployeePolicy, SalaryRange,
};
use rust_decimal::Decimal;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ELIGIBILITY_URL: &str = "http://localhost:5000";
const DEFAULT_ELIGIBILITY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("EMPLOYEES_MINIMUM_RAISE must be greater than zero, got {0}")]
    NonPositiveMinimumRaise(Decimal),

    #[error("EMPLOYEES_SALARY_MIN ({min}) must not exceed EMPLOYEES_SALARY_MAX ({max})")]
    InvalidSalaryRange { min: u32, max: u32 },

    #[error("APP_HOST must be 'localhost' or an IPv4/IPv6 address, got '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub employees: EmployeesConfig,
    pub promotion_eligibility: PromotionEligibilityConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeesConfig {
    pub policy: EmployeePolicy,
    /// Fixed seed for starting salaries; entropy seeded when absent.
    pub salary_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionEligibilityConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, "APP_PORT", DEFAULT_PORT)?;
        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let minimum_raise = parse_or(
            &lookup,
            "EMPLOYEES_MINIMUM_RAISE",
            Decimal::from(DEFAULT_MINIMUM_RAISE),
        )?;
        if minimum_raise <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveMinimumRaise(minimum_raise));
        }
        let bonus_per_course_year = parse_or(
            &lookup,
            "EMPLOYEES_BONUS_PER_COURSE_YEAR",
            Decimal::from(DEFAULT_BONUS_PER_COURSE_YEAR),
        )?;
        let min = parse_or(&lookup, "EMPLOYEES_SALARY_MIN", DEFAULT_STARTING_SALARY_MIN)?;
        let max = parse_or(&lookup, "EMPLOYEES_SALARY_MAX", DEFAULT_STARTING_SALARY_MAX)?;
        if min > max {
            return Err(ConfigError::InvalidSalaryRange { min, max });
        }
        let salary_seed = lookup("EMPLOYEES_SALARY_SEED")
            .map(|value| parse_value("EMPLOYEES_SALARY_SEED", value))
            .transpose()?;

        let base_url =
            lookup("PROMOTION_ELIGIBILITY_URL").unwrap_or_else(|| DEFAULT_ELIGIBILITY_URL.to_string());
        let timeout_ms = parse_or(
            &lookup,
            "PROMOTION_ELIGIBILITY_TIMEOUT_MS",
            DEFAULT_ELIGIBILITY_TIMEOUT_MS,
        )?;

        Ok(Self {
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            employees: EmployeesConfig {
                policy: EmployeePolicy {
                    minimum_raise,
                    bonus_per_course_year,
                    starting_salary: SalaryRange { min, max },
                },
                salary_seed,
            },
            promotion_eligibility: PromotionEligibilityConfig {
                base_url,
                timeout: Duration::from_millis(timeout_ms),
            },
        })
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => parse_value(key, value),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
