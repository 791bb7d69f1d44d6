use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use tracing::{debug, error, info, warn};

use crate::AppState;
use shared::{LogRequest, LogResponse};

/// Create the logging API router
pub fn router() -> Router<AppState> {
    Router::new().route("/logs", post(log_message))
}

/// Record a frontend log line, with planner events as structured fields
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let event_kind = request.event.as_ref().map(|event| event.kind()).unwrap_or("none");
    let event = request
        .event
        .as_ref()
        .and_then(|event| serde_json::to_string(event).ok())
        .unwrap_or_default();
    let message = request.message.as_str();

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(component, event_kind, %event, "{}", message),
        "warn" => warn!(component, event_kind, %event, "{}", message),
        "error" => error!(component, event_kind, %event, "{}", message),
        // Unknown levels are recorded as info
        _ => info!(component, event_kind, %event, "{}", message),
    }

    Ok(Json(LogResponse { success: true }))
}
