// Domain notifications raised by the employee context.
//
// Purpose
// - Carry the facts observers care about, independent of how they are delivered.
//
// Delivery
// - Events are handed to listeners synchronously through
//   `shared::infrastructure::listeners::EventListeners`, with the raising service as sender.

use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIsAbsent {
    pub employee_id: EmployeeId,
    pub occurred_at: DateTime<Utc>,
}

impl EmployeeIsAbsent {
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            occurred_at: Utc::now(),
        }
    }
}
