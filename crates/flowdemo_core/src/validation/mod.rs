//! Stateless field validation.
//!
//! # Responsibility
//! - Check raw caller input before it reaches a store.
//! - Report every violated rule at once through `ValidationResult`.
//!
//! # Invariants
//! - Validation never panics and never returns `Err` for bad input; failures
//!   are data, not faults.
//! - `is_valid` is true iff `errors` is empty.
//! - Errors are listed in the order the fields were checked.

mod user_fields;

pub use user_fields::{validate_user_fields, UserFields};

use crate::model::RecordId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const ERR_ID_NOT_INTEGER: &str = "ID must be an integer";
pub const ERR_ID_NOT_POSITIVE: &str = "ID must be a positive number";

// One `@`, dot-separated non-empty segments on both sides, at least one dot
// in the domain, no whitespace anywhere.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@.]+(?:\.[^\s@.]+)*@[^\s@.]+(?:\.[^\s@.]+)+$").expect("valid email regex")
});

/// Outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from collected errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        write!(f, "{}", self.errors.join("; "))
    }
}

impl std::error::Error for ValidationResult {}

/// Returns true when `email` looks like `local@domain.tld`.
///
/// Rules:
/// - exactly one `@` with non-empty local and domain parts;
/// - the domain has at least one `.` and every label is non-empty;
/// - the local part has no leading, trailing or doubled `.`;
/// - no whitespace anywhere.
pub fn validate_email_format(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks that `value` is a strictly positive integer.
///
/// Both rules are evaluated independently, so a value such as `-1.5`
/// reports two errors.
pub fn validate_identifier(value: f64) -> ValidationResult {
    let mut errors = Vec::new();

    if !value.is_finite() || value.fract() != 0.0 {
        errors.push(ERR_ID_NOT_INTEGER.to_string());
    }
    if value <= 0.0 {
        errors.push(ERR_ID_NOT_POSITIVE.to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Validates `value` and converts it into a store identifier.
pub fn checked_identifier(value: f64) -> Result<RecordId, ValidationResult> {
    let result = validate_identifier(value);
    if !result.is_valid {
        return Err(result);
    }
    // Saturates for values beyond u64::MAX; such ids simply match nothing.
    Ok(value as RecordId)
}
