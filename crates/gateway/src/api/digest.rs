//! Derived views over the history: today's summary and the appointment list.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::auth;
use crate::error::ApiError;
use crate::runtime::{self, AppointmentList};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AppointmentsReply {
    pub appointments: AppointmentList,
}

/// `GET /generate_summary`
pub async fn generate_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let credential = auth::resolve_credential(&state, &headers)?;
    let summary = runtime::generate_summary(&state, &credential, state.today()).await?;
    Ok(Json(json!({ "summary": summary })))
}

/// `GET /find_appointments`
pub async fn find_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AppointmentsReply>, ApiError> {
    let credential = auth::resolve_credential(&state, &headers)?;
    let appointments = runtime::find_appointments(&state, &credential, state.today()).await?;
    Ok(Json(AppointmentsReply { appointments }))
}
