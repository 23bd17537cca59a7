//! HTTP handlers and the route table.
//!
//! # Invariants
//! - Every response body is an `ApiResponse` envelope.
//! - "Not found" maps to 404, validation failures to 400, store faults to
//!   500, everything else to 2xx.

mod features;
mod users;

pub use features::{get_feature, list_features, toggle_feature};
pub use users::{create_user, delete_user, get_user, list_users, update_user};

use crate::envelope::{reply_bad_request, reply_ok, reply_server_error, Reply};
use crate::state::SharedState;
use axum::routing::{get, post};
use axum::Router;
use flowdemo_core::{checked_identifier, RecordId, ServiceError, ValidationResult};
use log::error;

pub const WELCOME_TEXT: &str = "Hello World! Git Flow Demo API";

/// `(method, path, description)` for every served route.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Welcome message"),
    ("GET", "/api/users", "Get all users"),
    ("POST", "/api/users", "Create user"),
    ("GET", "/api/users/:id", "Get user by ID"),
    ("PATCH", "/api/users/:id", "Update user"),
    ("DELETE", "/api/users/:id", "Delete user"),
    ("GET", "/api/features", "Get demo features"),
    ("GET", "/api/features/:id", "Get demo feature by ID"),
    ("POST", "/api/features/:id/toggle", "Toggle demo feature"),
];

/// Builds the router over `state`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/api/features", get(list_features))
        .route("/api/features/:id", get(get_feature))
        .route("/api/features/:id/toggle", post(toggle_feature))
        .with_state(state)
}

pub async fn welcome() -> Reply<String> {
    reply_ok(WELCOME_TEXT.to_string(), "Welcome to the demo application")
}

/// Result of reading a record id from a path segment.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PathId {
    Valid(RecordId),
    /// Not a number at all; treated like an id that matches nothing.
    Unparsable,
    /// A number that breaks the identifier rules.
    Invalid(ValidationResult),
}

pub(crate) fn parse_path_id(raw: &str) -> PathId {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => match checked_identifier(value) {
            Ok(id) => PathId::Valid(id),
            Err(result) => PathId::Invalid(result),
        },
        _ => PathId::Unparsable,
    }
}

/// Maps a service failure onto a 400 or 500 envelope.
pub(crate) fn reply_service_error<T>(
    err: ServiceError,
    invalid_message: &str,
    failed_message: &str,
) -> Reply<T> {
    match err {
        ServiceError::Validation(result) => {
            reply_bad_request(invalid_message, result.errors.join("; "))
        }
        ServiceError::Repo(err) => {
            error!("event=request_failed module=api status=error message=\"{failed_message}\" error={err}");
            reply_server_error(failed_message, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_path_id, router, welcome, PathId};
    use crate::state::AppState;
    use axum::http::StatusCode;
    use std::time::Duration;

    #[test]
    fn parses_path_ids() {
        assert_eq!(parse_path_id("1"), PathId::Valid(1));
        assert_eq!(parse_path_id("invalid"), PathId::Unparsable);
        assert_eq!(parse_path_id("NaN"), PathId::Unparsable);
        assert!(matches!(parse_path_id("-1"), PathId::Invalid(_)));
        assert!(matches!(parse_path_id("1.5"), PathId::Invalid(_)));
        assert!(matches!(parse_path_id("0"), PathId::Invalid(_)));
    }

    #[test]
    fn router_builds_without_conflicts() {
        let _ = router(AppState::seeded(Duration::ZERO).shared());
    }

    #[tokio::test]
    async fn welcome_returns_greeting() {
        let (status, body) = welcome().await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.0.success);
        assert!(body.0.data.unwrap().contains("Hello World"));
    }
}
