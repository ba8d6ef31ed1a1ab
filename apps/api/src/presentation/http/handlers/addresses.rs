use crate::{
    application::{
        parse_address::dto::ParseAddressRequest,
        parse_batch::dto::{BatchParseRequest, BatchParseResponse},
    },
    domain::address::ParsedAddressRecord,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{Json, extract::State};

pub async fn parse_address(
    State(state): State<AppState>,
    Json(request): Json<ParseAddressRequest>,
) -> Result<Json<ParsedAddressRecord>, AppError> {
    let record = state.parse_address().execute(request)?;
    Ok(Json(record))
}

/// Batches are CPU-bound for up to `BATCH_MAX_RECORDS` rows, so they run on the
/// blocking pool instead of an async worker.
pub async fn parse_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchParseRequest>,
) -> Result<Json<BatchParseResponse>, AppError> {
    let use_case = state.parse_batch();
    let response = tokio::task::spawn_blocking(move || use_case.execute(request)).await??;
    Ok(Json(response))
}
