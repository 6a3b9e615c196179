//! Friendship models.

use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// Lifecycle of a friend request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Declined,
}

/// A pending or resolved friend request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: u64,
    pub sender: UserSummary,
    pub status: FriendRequestStatus,
}

/// Payload for `POST /users/{userId}/friends/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequest {
    pub target_id: u64,
}
