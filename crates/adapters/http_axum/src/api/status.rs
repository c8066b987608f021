//! JSON REST handlers for the arming and alarm statuses.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Both statuses, as returned by the status endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub arming_status: ArmingStatus,
    pub alarm_status: AlarmStatus,
}

/// Request body for changing the arming status.
#[derive(Deserialize)]
pub struct SetArmingRequest {
    pub status: ArmingStatus,
}

async fn current<R, C>(state: &AppState<R, C>) -> Result<StatusResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    Ok(StatusResponse {
        arming_status: state.security_service.get_arming_status().await?,
        alarm_status: state.security_service.get_alarm_status().await?,
    })
}

/// `GET /api/status`
pub async fn get<R, C>(State(state): State<AppState<R, C>>) -> Result<Json<StatusResponse>, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    Ok(Json(current(&state).await?))
}

/// `PUT /api/status/arming`
pub async fn set_arming<R, C>(
    State(state): State<AppState<R, C>>,
    Json(req): Json<SetArmingRequest>,
) -> Result<Json<StatusResponse>, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    state.security_service.set_arming_status(req.status).await?;
    Ok(Json(current(&state).await?))
}
