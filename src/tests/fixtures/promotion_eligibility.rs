// Test doubles for the PromotionEligibility port.

use crate::modules::employees::core::ports::{PromotionEligibility, PromotionEligibilityCheckError};
use crate::shared::core::primitives::EmployeeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Always gives the same answer and counts the calls.
pub struct FixedPromotionEligibility {
    eligible: bool,
    calls: AtomicUsize,
}

impl FixedPromotionEligibility {
    pub fn new(eligible: bool) -> Self {
        Self {
            eligible,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PromotionEligibility for FixedPromotionEligibility {
    async fn check(&self, _employee_id: EmployeeId) -> Result<bool, PromotionEligibilityCheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.eligible)
    }
}

/// Always fails with the configured error.
pub struct FailingPromotionEligibility(pub PromotionEligibilityCheckError);

#[async_trait::async_trait]
impl PromotionEligibility for FailingPromotionEligibility {
    async fn check(&self, _employee_id: EmployeeId) -> Result<bool, PromotionEligibilityCheckError> {
        Err(self.0.clone())
    }
}

/// Answers `true`, but only after the given delay.
pub struct SlowPromotionEligibility(pub Duration);

#[async_trait::async_trait]
impl PromotionEligibility for SlowPromotionEligibility {
    async fn check(&self, _employee_id: EmployeeId) -> Result<bool, PromotionEligibilityCheckError> {
        tokio::time::sleep(self.0).await;
        Ok(true)
    }
}
