use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{AmountPayload, BalanceResponse, InvestPayload},
};
use fundlink_core::ledger::{parse_amount, InvestmentOutcome, LedgerServiceTrait};

async fn invest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InvestPayload>,
) -> ApiResult<Json<InvestmentOutcome>> {
    let amount = parse_amount(&payload.amount)?;
    let outcome = state
        .ledger_service
        .invest(&payload.email, &payload.project_id, amount)
        .await?;
    info!(
        "{} invested {} into {}",
        payload.email, amount, payload.project_id
    );
    Ok(Json(outcome))
}

async fn credit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AmountPayload>,
) -> ApiResult<Json<BalanceResponse>> {
    let amount = parse_amount(&payload.amount)?;
    let balance = state.ledger_service.credit(&payload.email, amount).await?;
    Ok(Json(BalanceResponse {
        email: payload.email,
        balance,
    }))
}

async fn debit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AmountPayload>,
) -> ApiResult<Json<BalanceResponse>> {
    let amount = parse_amount(&payload.amount)?;
    let balance = state.ledger_service.debit(&payload.email, amount).await?;
    Ok(Json(BalanceResponse {
        email: payload.email,
        balance,
    }))
}

async fn get_balance(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = state.ledger_service.get_balance(&email)?;
    Ok(Json(BalanceResponse { email, balance }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ledger/invest", post(invest))
        .route("/ledger/credit", post(credit))
        .route("/ledger/debit", post(debit))
        .route("/ledger/balance/{email}", get(get_balance))
}
