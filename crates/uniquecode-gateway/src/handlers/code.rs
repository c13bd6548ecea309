use crate::error::Result;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uniquecode_core::{CreateUniqueCodeRequest, UniqueCodeResponse};

pub async fn create_code_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUniqueCodeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UniqueCodeResponse>)> {
    let Json(request) = payload?;
    info!(?request, "received create request");
    let response = state.issuer().create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
