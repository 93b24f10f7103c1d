use serde::{Deserialize, Serialize};

/// Owner reference as exposed to clients: the user id and display name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}
