use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Fields, OwnerSummary, RecordId};

/// A stored record of any collection.
///
/// `id`, `created_at` and the owner are fixed at creation; only `fields`
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub fields: Fields,

    /// `None` once the owning user no longer exists
    pub user: Option<OwnerSummary>,
}

impl Record {
    /// Create a new record for insertion
    pub fn new_for_insert(fields: Fields, owner: OwnerSummary) -> Self {
        Self {
            id: RecordId::new_v4(),
            created_at: Utc::now(),
            fields,
            user: Some(owner),
        }
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}
