//! Camera image upload.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_domain::image::Image;
use catpoint_domain::status::AlarmStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Outcome of processing one image.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageResponse {
    pub cat_detected: bool,
    pub alarm_status: AlarmStatus,
}

/// `POST /api/images` — the raw request body is the encoded image.
pub async fn process<R, C>(
    State(state): State<AppState<R, C>>,
    body: Bytes,
) -> Result<Json<ImageResponse>, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let image = Image::new(body.to_vec());
    let cat_detected = state.security_service.process_image(&image).await?;
    let alarm_status = state.security_service.get_alarm_status().await?;
    Ok(Json(ImageResponse {
        cat_detected,
        alarm_status,
    }))
}
