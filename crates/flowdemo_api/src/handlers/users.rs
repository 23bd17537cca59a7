//! `/api/users` handlers.

use super::{parse_path_id, reply_service_error, PathId};
use crate::envelope::{reply_bad_request, reply_created, reply_not_found, reply_ok, Reply};
use crate::state::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use flowdemo_core::{RecordId, User, UserFields};

const USER_NOT_FOUND: &str = "User not found";
const INVALID_USER_ID: &str = "Invalid user ID";
const INVALID_USER_DATA: &str = "Invalid user data";

pub async fn list_users(State(state): State<SharedState>) -> Reply<Vec<User>> {
    state.simulate_latency().await;
    match state.users.list_users() {
        Ok(users) => reply_ok(users, "Users retrieved successfully"),
        Err(err) => reply_service_error(err, INVALID_USER_DATA, "Failed to retrieve users"),
    }
}

pub async fn get_user(State(state): State<SharedState>, Path(raw_id): Path<String>) -> Reply<User> {
    let id = match parse_path_id(&raw_id) {
        PathId::Valid(id) => id,
        PathId::Unparsable => return reply_not_found(USER_NOT_FOUND),
        PathId::Invalid(result) => return reply_bad_request(INVALID_USER_ID, result.to_string()),
    };

    state.simulate_latency().await;
    match state.users.get_user(id) {
        Ok(Some(user)) => reply_ok(user, "User retrieved successfully"),
        Ok(None) => reply_not_found(USER_NOT_FOUND),
        Err(err) => reply_service_error(err, INVALID_USER_DATA, "Failed to retrieve user"),
    }
}

pub async fn create_user(
    State(state): State<SharedState>,
    body: Result<Json<UserFields>, JsonRejection>,
) -> Reply<User> {
    let fields = match body {
        Ok(Json(fields)) => fields,
        Err(rejection) => return reply_bad_request(INVALID_USER_DATA, rejection.body_text()),
    };

    state.simulate_latency().await;
    match state.users.create_user(fields) {
        Ok(user) => reply_created(user, "User created successfully"),
        Err(err) => reply_service_error(err, INVALID_USER_DATA, "Failed to create user"),
    }
}

pub async fn update_user(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UserFields>, JsonRejection>,
) -> Reply<User> {
    let id = match parse_path_id(&raw_id) {
        PathId::Valid(id) => id,
        PathId::Unparsable => return reply_not_found(USER_NOT_FOUND),
        PathId::Invalid(result) => return reply_bad_request(INVALID_USER_ID, result.to_string()),
    };
    let fields = match body {
        Ok(Json(fields)) => fields,
        Err(rejection) => return reply_bad_request(INVALID_USER_DATA, rejection.body_text()),
    };

    state.simulate_latency().await;
    match state.users.update_user(id, fields) {
        Ok(Some(user)) => reply_ok(user, "User updated successfully"),
        Ok(None) => reply_not_found(USER_NOT_FOUND),
        Err(err) => reply_service_error(err, INVALID_USER_DATA, "Failed to update user"),
    }
}

/// Deletes a user; the payload on success is the removed id.
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Reply<RecordId> {
    let id = match parse_path_id(&raw_id) {
        PathId::Valid(id) => id,
        PathId::Unparsable => return reply_not_found(USER_NOT_FOUND),
        PathId::Invalid(result) => return reply_bad_request(INVALID_USER_ID, result.to_string()),
    };

    state.simulate_latency().await;
    match state.users.delete_user(id) {
        Ok(true) => reply_ok(id, "User deleted successfully"),
        Ok(false) => reply_not_found(USER_NOT_FOUND),
        Err(err) => reply_service_error(err, INVALID_USER_DATA, "Failed to delete user"),
    }
}
