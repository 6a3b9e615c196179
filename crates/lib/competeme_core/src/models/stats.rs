//! Aggregated activity statistics.

use serde::{Deserialize, Serialize};

/// One row of the per-activity breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopActivity {
    pub title: String,
    pub duration_minutes: u32,
}

/// Summary returned by `GET /users/{userId}/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub user_id: u64,
    pub total_duration_minutes: u64,
    pub activity_count: u32,
    pub streak_days: u32,
    pub top_activities: Vec<TopActivity>,
}
