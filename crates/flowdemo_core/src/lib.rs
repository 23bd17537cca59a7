//! Core domain logic for the flow demo service.
//! This crate is the single source of truth for record and validation invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::feature::Feature;
pub use model::user::{NewUser, User, UserPatch};
pub use model::{EpochMillis, RecordId};
pub use service::feature_service::FeatureService;
pub use service::user_service::UserService;
pub use service::{ServiceError, ServiceResult};
pub use store::seed::{seed_features, seed_users};
pub use store::{FeatureRepository, MemoryStore, RepoError, RepoResult, UserRepository};
pub use validation::{
    checked_identifier, validate_email_format, validate_identifier, validate_user_fields,
    UserFields, ValidationResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
