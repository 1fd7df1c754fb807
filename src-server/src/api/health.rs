use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use crate::{error::ApiResult, main_lib::AppState};
use fundlink_core::accounts::AccountServiceTrait;

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Ready once the store answers a read
async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    state.account_service.list_accounts()?;
    Ok(StatusCode::OK)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
