//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod images;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;
pub mod sse;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::routing::{delete, get, post, put};

use catpoint_app::ports::{ImageClassifier, SecurityRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, C>() -> Router<AppState<R, C>>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    Router::new()
        // Statuses
        .route("/status", get(status::get::<R, C>))
        .route("/status/arming", put(status::set_arming::<R, C>))
        // Sensors
        .route(
            "/sensors",
            get(sensors::list::<R, C>).post(sensors::create::<R, C>),
        )
        .route(
            "/sensors/{sensor_type}/{name}",
            delete(sensors::delete::<R, C>),
        )
        .route(
            "/sensors/{sensor_type}/{name}/active",
            put(sensors::set_active::<R, C>),
        )
        // Camera
        .route("/images", post(images::process::<R, C>))
        // Events
        .route("/events/stream", get(sse::stream::<R, C>))
}
