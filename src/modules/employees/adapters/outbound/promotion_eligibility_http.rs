// HTTP implementation of the PromotionEligibility port.
//
// Contract
// - GET {base_url}/api/promotioneligibilities/{employee_id}
// - 2xx with body {"eligibleForPromotion": bool}; anything else is a failed check.

use crate::modules::employees::core::ports::{PromotionEligibility, PromotionEligibilityCheckError};
use crate::shared::core::primitives::EmployeeId;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionEligibilityResponse {
    pub eligible_for_promotion: bool,
}

pub struct HttpPromotionEligibility {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPromotionEligibility {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PromotionEligibilityCheckError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PromotionEligibilityCheckError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, employee_id: EmployeeId) -> String {
        format!("{}/api/promotioneligibilities/{employee_id}", self.base_url)
    }
}

#[async_trait]
impl PromotionEligibility for HttpPromotionEligibility {
    async fn check(&self, employee_id: EmployeeId) -> Result<bool, PromotionEligibilityCheckError> {
        let url = self.url_for(employee_id);
        debug!("HTTP GET: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| PromotionEligibilityCheckError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PromotionEligibilityCheckError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PromotionEligibilityCheckError::Transport(e.to_string()))?;
        let parsed: PromotionEligibilityResponse = serde_json::from_slice(&body)
            .map_err(|e| PromotionEligibilityCheckError::MalformedResponse(e.to_string()))?;

        Ok(parsed.eligible_for_promotion)
    }
}
