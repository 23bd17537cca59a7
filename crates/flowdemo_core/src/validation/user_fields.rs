//! User field validation and conversion into typed payloads.

use super::{validate_email_format, ValidationResult};
use crate::model::user::{NewUser, UserPatch};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const ERR_NAME_REQUIRED: &str = "Name is required and cannot be empty";
pub const ERR_NAME_TOO_LONG: &str = "Name must be less than 100 characters";
pub const ERR_NAME_NOT_STRING: &str = "Name must be a string";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required and cannot be empty";
pub const ERR_EMAIL_FORMAT: &str = "Email format is invalid";
pub const ERR_EMAIL_NOT_STRING: &str = "Email must be a string";
pub const ERR_IS_ACTIVE_NOT_BOOL: &str = "isActive must be a boolean value";

const NAME_MAX_CHARS: usize = 100;

/// Untyped user fields as received from a caller.
///
/// A key that is absent stays `None`; a key that is present, even with a
/// JSON `null`, becomes `Some(value)` and is checked. Unknown keys are
/// ignored. Only a JSON object deserializes; arrays and scalars are rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFields {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub is_active: Option<Value>,
}

impl<'de> Deserialize<'de> for UserFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            name: object.remove("name"),
            email: object.remove("email"),
            is_active: object.remove("isActive"),
        })
    }
}

impl UserFields {
    /// Validates the present fields and converts them into a partial update.
    pub fn into_patch(self) -> Result<UserPatch, ValidationResult> {
        let result = validate_user_fields(&self);
        if !result.is_valid {
            return Err(result);
        }

        Ok(UserPatch {
            name: into_text(self.name),
            email: into_text(self.email),
            is_active: self.is_active.and_then(|value| value.as_bool()),
        })
    }

    /// Validates the fields for a create, where `name` and `email` are
    /// mandatory and `isActive` defaults to `true`.
    pub fn into_new_user(self) -> Result<NewUser, ValidationResult> {
        let required = UserFields {
            name: Some(self.name.unwrap_or(Value::Null)),
            email: Some(self.email.unwrap_or(Value::Null)),
            is_active: self.is_active,
        };
        let result = validate_user_fields(&required);
        if !result.is_valid {
            return Err(result);
        }

        match (into_text(required.name), into_text(required.email)) {
            (Some(name), Some(email)) => Ok(NewUser {
                name,
                email,
                is_active: required
                    .is_active
                    .and_then(|value| value.as_bool())
                    .unwrap_or(true),
            }),
            _ => Err(ValidationResult::from_errors(vec![
                ERR_NAME_REQUIRED.to_string(),
                ERR_EMAIL_REQUIRED.to_string(),
            ])),
        }
    }
}

/// Checks every present field and collects all violated rules.
///
/// Order of checks: `name`, `email`, `isActive`. Absent fields are skipped,
/// so an empty input is always valid.
pub fn validate_user_fields(fields: &UserFields) -> ValidationResult {
    let mut errors = Vec::new();

    match &fields.name {
        None => {}
        Some(Value::String(name)) => {
            if name.trim().is_empty() {
                errors.push(ERR_NAME_REQUIRED.to_string());
            }
            if name.chars().count() > NAME_MAX_CHARS {
                errors.push(ERR_NAME_TOO_LONG.to_string());
            }
        }
        Some(Value::Null) => errors.push(ERR_NAME_REQUIRED.to_string()),
        Some(_) => errors.push(ERR_NAME_NOT_STRING.to_string()),
    }

    match &fields.email {
        None => {}
        Some(Value::String(email)) => {
            if email.trim().is_empty() {
                errors.push(ERR_EMAIL_REQUIRED.to_string());
            }
            if !email.is_empty() && !validate_email_format(email) {
                errors.push(ERR_EMAIL_FORMAT.to_string());
            }
        }
        Some(Value::Null) => errors.push(ERR_EMAIL_REQUIRED.to_string()),
        Some(_) => errors.push(ERR_EMAIL_NOT_STRING.to_string()),
    }

    match &fields.is_active {
        None | Some(Value::Bool(_)) => {}
        Some(_) => errors.push(ERR_IS_ACTIVE_NOT_BOOL.to_string()),
    }

    ValidationResult::from_errors(errors)
}

fn into_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> UserFields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_input_is_valid() {
        let result = validate_user_fields(&UserFields::default());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn accepts_complete_valid_input() {
        let result = validate_user_fields(&fields(json!({
            "name": "John Doe",
            "email": "john@example.com",
            "isActive": true
        })));
        assert!(result.is_valid, "{result}");
    }

    #[test]
    fn empty_name_is_required_error() {
        let result = validate_user_fields(&fields(json!({ "name": "" })));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![ERR_NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn whitespace_name_is_required_error() {
        let result = validate_user_fields(&fields(json!({ "name": "   " })));
        assert_eq!(result.errors, vec![ERR_NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn long_name_reports_length_violation() {
        let result = validate_user_fields(&fields(json!({ "name": "a".repeat(101) })));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![ERR_NAME_TOO_LONG.to_string()]);

        let at_limit = validate_user_fields(&fields(json!({ "name": "a".repeat(100) })));
        assert!(at_limit.is_valid);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let result = validate_user_fields(&fields(json!({ "name": "é".repeat(100) })));
        assert!(result.is_valid, "{result}");
    }

    #[test]
    fn invalid_email_format_is_reported() {
        let result = validate_user_fields(&fields(json!({
            "name": "John Doe",
            "email": "invalid-email"
        })));
        assert_eq!(result.errors, vec![ERR_EMAIL_FORMAT.to_string()]);
    }

    #[test]
    fn blank_email_reports_required_and_format() {
        let empty = validate_user_fields(&fields(json!({ "email": "" })));
        assert_eq!(empty.errors, vec![ERR_EMAIL_REQUIRED.to_string()]);

        let blank = validate_user_fields(&fields(json!({ "email": "  " })));
        assert_eq!(
            blank.errors,
            vec![ERR_EMAIL_REQUIRED.to_string(), ERR_EMAIL_FORMAT.to_string()]
        );
    }

    #[test]
    fn non_boolean_is_active_is_rejected() {
        let result = validate_user_fields(&fields(json!({ "isActive": "yes" })));
        assert_eq!(result.errors, vec![ERR_IS_ACTIVE_NOT_BOOL.to_string()]);

        let null = validate_user_fields(&fields(json!({ "isActive": null })));
        assert_eq!(null.errors, vec![ERR_IS_ACTIVE_NOT_BOOL.to_string()]);
    }

    #[test]
    fn errors_follow_field_order() {
        let result = validate_user_fields(&fields(json!({
            "isActive": 1,
            "email": "nope",
            "name": 42
        })));
        assert_eq!(
            result.errors,
            vec![
                ERR_NAME_NOT_STRING.to_string(),
                ERR_EMAIL_FORMAT.to_string(),
                ERR_IS_ACTIVE_NOT_BOOL.to_string(),
            ]
        );
    }

    #[test]
    fn null_name_is_checked_not_skipped() {
        let result = validate_user_fields(&fields(json!({ "name": null })));
        assert_eq!(result.errors, vec![ERR_NAME_REQUIRED.to_string()]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed = fields(json!({ "id": 99, "createdAt": 0, "role": "admin" }));
        assert_eq!(parsed, UserFields::default());
        assert_eq!(parsed.into_patch().unwrap(), UserPatch::default());
    }

    #[test]
    fn non_object_input_does_not_deserialize() {
        for value in [json!([1, 2]), json!("John Doe"), json!(42)] {
            assert!(
                serde_json::from_value::<UserFields>(value.clone()).is_err(),
                "{value} was accepted"
            );
        }
        let err = serde_json::from_str::<UserFields>("[1,2]").unwrap_err();
        assert!(err.to_string().contains("expected a map"), "{err}");
    }

    #[test]
    fn into_patch_keeps_only_present_fields() {
        let patch = fields(json!({ "name": "Updated Name", "isActive": false }))
            .into_patch()
            .unwrap();
        assert_eq!(patch.name.as_deref(), Some("Updated Name"));
        assert_eq!(patch.email, None);
        assert_eq!(patch.is_active, Some(false));
    }

    #[test]
    fn into_new_user_requires_name_and_email() {
        let err = fields(json!({ "isActive": true })).into_new_user().unwrap_err();
        assert_eq!(
            err.errors,
            vec![ERR_NAME_REQUIRED.to_string(), ERR_EMAIL_REQUIRED.to_string()]
        );
    }

    #[test]
    fn into_new_user_defaults_active() {
        let user = fields(json!({ "name": "Test User", "email": "test@example.com" }))
            .into_new_user()
            .unwrap();
        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
        assert!(user.is_active);
    }
}
