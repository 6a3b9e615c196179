//! Authorization predicates gating mutation UI.
//!
//! Presentation-layer convenience only: these checks decide what the client
//! renders, not what is permitted. The backend independently enforces
//! authorization on every request — nothing here is a security boundary.

use crate::models::auth::{Role, UserIdentity};

/// True iff the acting identity is the target user.
pub fn is_same_identity(target_id: u64, acting: Option<&UserIdentity>) -> bool {
    acting.is_some_and(|identity| identity.id == target_id)
}

/// True iff the acting identity is the target user or holds the admin role.
pub fn has_access(target_id: u64, acting: Option<&UserIdentity>) -> bool {
    is_same_identity(target_id, acting)
        || acting.is_some_and(|identity| identity.role == Role::Admin)
}
