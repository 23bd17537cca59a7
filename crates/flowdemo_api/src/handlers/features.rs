//! `/api/features` handlers.

use super::{parse_path_id, reply_service_error, PathId};
use crate::envelope::{reply_bad_request, reply_not_found, reply_ok, Reply};
use crate::state::SharedState;
use axum::extract::{Path, State};
use flowdemo_core::Feature;

const FEATURE_NOT_FOUND: &str = "Demo feature not found";
const INVALID_FEATURE_ID: &str = "Invalid demo feature ID";

pub async fn list_features(State(state): State<SharedState>) -> Reply<Vec<Feature>> {
    state.simulate_latency().await;
    match state.features.list_features() {
        Ok(features) => reply_ok(features, "Demo features retrieved successfully"),
        Err(err) => reply_service_error(err, INVALID_FEATURE_ID, "Failed to retrieve demo features"),
    }
}

pub async fn get_feature(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Reply<Feature> {
    let id = match parse_path_id(&raw_id) {
        PathId::Valid(id) => id,
        PathId::Unparsable => return reply_not_found(FEATURE_NOT_FOUND),
        PathId::Invalid(result) => {
            return reply_bad_request(INVALID_FEATURE_ID, result.to_string())
        }
    };

    state.simulate_latency().await;
    match state.features.get_feature(id) {
        Ok(Some(feature)) => reply_ok(feature, "Demo feature retrieved successfully"),
        Ok(None) => reply_not_found(FEATURE_NOT_FOUND),
        Err(err) => reply_service_error(err, INVALID_FEATURE_ID, "Failed to retrieve demo feature"),
    }
}

pub async fn toggle_feature(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Reply<Feature> {
    let id = match parse_path_id(&raw_id) {
        PathId::Valid(id) => id,
        PathId::Unparsable => return reply_not_found(FEATURE_NOT_FOUND),
        PathId::Invalid(result) => {
            return reply_bad_request(INVALID_FEATURE_ID, result.to_string())
        }
    };

    state.simulate_latency().await;
    match state.features.toggle_feature(id) {
        Ok(Some(feature)) => reply_ok(feature, "Demo feature toggled successfully"),
        Ok(None) => reply_not_found(FEATURE_NOT_FOUND),
        Err(err) => reply_service_error(err, INVALID_FEATURE_ID, "Failed to toggle demo feature"),
    }
}
