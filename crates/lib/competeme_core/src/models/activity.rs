//! Activity log models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    pub title: String,
    pub duration_minutes: u32,
    pub date: NaiveDate,
}

/// Payload for `POST /users/{userId}/activities/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub title: String,
    pub duration_minutes: u32,
}
