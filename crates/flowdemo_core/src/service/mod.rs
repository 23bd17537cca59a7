//! Use-case services over the record stores.
//!
//! # Responsibility
//! - Run validation before any store mutation.
//! - Keep HTTP and other callers decoupled from store details.
//!
//! # Invariants
//! - A rejected payload never reaches the store.
//! - "Not found" stays a value (`None` / `false`), never a `ServiceError`.

pub mod feature_service;
pub mod user_service;

use crate::store::RepoError;
use crate::validation::ValidationResult;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for user and feature use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input broke one or more field rules.
    Validation(ValidationResult),
    /// Store fault.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(result) => write!(f, "validation failed: {result}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(result) => Some(result),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ValidationResult> for ServiceError {
    fn from(value: ValidationResult) -> Self {
        Self::Validation(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
