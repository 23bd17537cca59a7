//! User record.

use super::{Creatable, EpochMillis, Patchable, Record, RecordId};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Serialized with camelCase keys (`createdAt`, `isActive`) to match the
/// public JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    /// Set once at creation.
    pub created_at: EpochMillis,
    pub is_active: bool,
}

/// Create payload for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

/// Partial update for a user. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl Record for User {
    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> EpochMillis {
        self.created_at
    }
}

impl Creatable for User {
    type Draft = NewUser;

    fn from_draft(id: RecordId, created_at: EpochMillis, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            created_at,
            is_active: draft.is_active,
        }
    }
}

impl Patchable for User {
    type Patch = UserPatch;

    fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}
