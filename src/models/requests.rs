use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to compute matches for a participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}
