//! User use-case service.

use super::ServiceResult;
use crate::model::user::User;
use crate::model::RecordId;
use crate::store::UserRepository;
use crate::validation::UserFields;
use log::{info, warn};

/// Use-case service wrapper for user operations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.list_users()?)
    }

    pub fn get_user(&self, id: RecordId) -> ServiceResult<Option<User>> {
        Ok(self.repo.get_user(id)?)
    }

    /// Validates `fields` as a complete user and stores it.
    ///
    /// # Contract
    /// - `name` and `email` are required; `isActive` defaults to `true`.
    /// - Returns the stored record including its assigned id.
    pub fn create_user(&self, fields: UserFields) -> ServiceResult<User> {
        let new_user = fields.into_new_user().inspect_err(|result| {
            warn!(
                "event=user_create module=service status=rejected errors={}",
                result.errors.len()
            );
        })?;

        let user = self.repo.create_user(new_user)?;
        info!("event=user_create module=service status=ok id={}", user.id);
        Ok(user)
    }

    /// Validates the present `fields` and merges them over user `id`.
    ///
    /// Validation runs before the lookup, so an invalid payload for an
    /// unknown id reports the validation failure.
    pub fn update_user(&self, id: RecordId, fields: UserFields) -> ServiceResult<Option<User>> {
        let patch = fields.into_patch().inspect_err(|result| {
            warn!(
                "event=user_update module=service status=rejected id={id} errors={}",
                result.errors.len()
            );
        })?;

        let updated = self.repo.update_user(id, patch)?;
        match &updated {
            Some(_) => info!("event=user_update module=service status=ok id={id}"),
            None => info!("event=user_update module=service status=not_found id={id}"),
        }
        Ok(updated)
    }

    pub fn delete_user(&self, id: RecordId) -> ServiceResult<bool> {
        let removed = self.repo.delete_user(id)?;
        info!(
            "event=user_delete module=service status={} id={id}",
            if removed { "ok" } else { "not_found" }
        );
        Ok(removed)
    }
}
