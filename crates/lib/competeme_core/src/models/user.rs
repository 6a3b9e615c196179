//! User models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::{Role, UserIdentity};

/// Full profile returned by `GET /users/{userId}/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub role: Role,
    pub image_url: Option<String>,
    pub date_joined: DateTime<Utc>,
}

impl UserProfile {
    /// The acting identity for authorization checks.
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            role: self.role,
        }
    }
}

/// Search-result row from `GET /users/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub image_url: Option<String>,
}

/// Body for `PUT /users/{id}/image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpdate {
    pub image_url: String,
}
