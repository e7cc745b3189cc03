// Course entity.
//
// Purpose
// - Represent a training course employees can attend.
//
// Invariants
// - `is_new` is true only for a course built in memory with `Course::new` and not yet stored.
// - Any course materialized by a repository reports `is_new == false`; the flag is never
//   read back from a serialized form.

use crate::shared::core::primitives::CourseId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(skip_deserializing)]
    pub is_new: bool,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(),
            title: title.into(),
            is_new: true,
        }
    }

    /// A course as it comes out of storage.
    pub fn existing(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_new: false,
        }
    }
}
