use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use mindcare_core::models::metrics::UsageEvent;

use crate::error::ApiError;
use crate::state::AppState;
use crate::usage;

#[derive(Deserialize)]
pub struct EventRequest {
    event: UsageEvent,
}

pub async fn record_event(
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<StatusCode, ApiError> {
    usage::update_metrics(state.store.as_ref(), |m| m.record(req.event)).await?;
    tracing::debug!(event = ?req.event, "usage event recorded");
    Ok(StatusCode::NO_CONTENT)
}
