//! JSON REST handlers for sensors.
//!
//! Sensors are addressed by their identity, `/{sensor_type}/{name}`.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_domain::sensor::{Sensor, SensorType};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a sensor.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    pub sensor_type: SensorType,
}

/// Request body for changing a sensor's activation.
#[derive(Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sensor>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Sensor>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the activation endpoint.
pub enum SetActiveResponse {
    Ok(Json<Sensor>),
}

impl IntoResponse for SetActiveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn sensor_from_path(sensor_type: &str, name: String) -> Result<Sensor, ApiError> {
    let sensor_type: SensorType = sensor_type.parse()?;
    Ok(Sensor::new(name, sensor_type))
}

/// `GET /api/sensors`
pub async fn list<R, C>(State(state): State<AppState<R, C>>) -> Result<ListResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let sensors = state.security_service.get_sensors().await?;
    Ok(ListResponse::Ok(Json(sensors.into_iter().collect())))
}

/// `POST /api/sensors`
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    Json(req): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let sensor = Sensor::builder()
        .name(req.name)
        .sensor_type(req.sensor_type)
        .build()?;
    let created = state.security_service.add_sensor(sensor).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/sensors/:sensor_type/:name`
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Path((sensor_type, name)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let sensor = sensor_from_path(&sensor_type, name)?;
    state.security_service.remove_sensor(&sensor).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/sensors/:sensor_type/:name/active`
pub async fn set_active<R, C>(
    State(state): State<AppState<R, C>>,
    Path((sensor_type, name)): Path<(String, String)>,
    Json(req): Json<SetActiveRequest>,
) -> Result<SetActiveResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let sensor = sensor_from_path(&sensor_type, name)?;
    let updated = state
        .security_service
        .change_sensor_activation_status(&sensor, req.active)
        .await?;
    Ok(SetActiveResponse::Ok(Json(updated)))
}
