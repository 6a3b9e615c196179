//! Challenge models.

use serde::{Deserialize, Serialize};

/// A challenge with its accumulated progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub goal: u32,
    pub progress: u32,
    pub unit: String,
    /// User ids taking part.
    pub participants: Vec<u64>,
}

/// Payload for `POST /users/{userId}/challenges/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChallenge {
    pub title: String,
    pub description: Option<String>,
    pub goal: u32,
    pub unit: String,
}

/// Payload for `POST /users/{userId}/challenges/{challengeId}/progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub amount: u32,
}
