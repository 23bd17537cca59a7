//! In-memory record stores and the repository seams services depend on.
//!
//! # Responsibility
//! - Own each record sequence exclusively and expose list/get/create/update/
//!   delete/toggle operations over it.
//! - Define use-case oriented repository contracts for the service layer.
//!
//! # Invariants
//! - "Not found" is `Ok(None)` / `Ok(false)`, never an error.
//! - Identifiers are unique within a store and never reused after delete.
//! - Every operation runs under the store's mutex, so a read always sees a
//!   fully applied previous write.
//! - `RepoError` is reserved for faults (a poisoned lock).

mod memory;
pub mod seed;

pub use memory::MemoryStore;

use crate::model::feature::Feature;
use crate::model::user::{NewUser, User, UserPatch};
use crate::model::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store fault. Expected outcomes such as "not found" are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A previous operation panicked while holding the store lock.
    LockPoisoned { store: &'static str },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned { store } => write!(f, "{store} store lock poisoned"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for user records.
pub trait UserRepository {
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn get_user(&self, id: RecordId) -> RepoResult<Option<User>>;
    fn create_user(&self, new_user: NewUser) -> RepoResult<User>;
    fn update_user(&self, id: RecordId, patch: UserPatch) -> RepoResult<Option<User>>;
    fn delete_user(&self, id: RecordId) -> RepoResult<bool>;
}

/// Repository interface for feature flag records.
pub trait FeatureRepository {
    fn list_features(&self) -> RepoResult<Vec<Feature>>;
    fn get_feature(&self, id: RecordId) -> RepoResult<Option<Feature>>;
    fn toggle_feature(&self, id: RecordId) -> RepoResult<Option<Feature>>;
}

impl UserRepository for MemoryStore<User> {
    fn list_users(&self) -> RepoResult<Vec<User>> {
        self.list_all()
    }

    fn get_user(&self, id: RecordId) -> RepoResult<Option<User>> {
        self.get_by_id(id)
    }

    fn create_user(&self, new_user: NewUser) -> RepoResult<User> {
        self.create(new_user)
    }

    fn update_user(&self, id: RecordId, patch: UserPatch) -> RepoResult<Option<User>> {
        self.update(id, patch)
    }

    fn delete_user(&self, id: RecordId) -> RepoResult<bool> {
        self.delete(id)
    }
}

impl FeatureRepository for MemoryStore<Feature> {
    fn list_features(&self) -> RepoResult<Vec<Feature>> {
        self.list_all()
    }

    fn get_feature(&self, id: RecordId) -> RepoResult<Option<Feature>> {
        self.get_by_id(id)
    }

    fn toggle_feature(&self, id: RecordId) -> RepoResult<Option<Feature>> {
        self.toggle_flag(id)
    }
}
