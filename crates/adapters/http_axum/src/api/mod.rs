//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod arming;
#[allow(clippy::missing_errors_doc)]
pub mod images;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};

use crate::state::AppState;

/// Largest camera frame accepted by `POST /api/images`.
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

/// Build the `/api` sub-router.
pub fn routes<R, C, P>() -> Router<AppState<R, C, P>>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status::get::<R, C, P>))
        .route("/arming", put(arming::update::<R, C, P>))
        // Sensors
        .route(
            "/sensors",
            get(sensors::list::<R, C, P>).post(sensors::create::<R, C, P>),
        )
        .route(
            "/sensors/{sensor_type}/{name}",
            get(sensors::get::<R, C, P>).delete(sensors::delete::<R, C, P>),
        )
        .route(
            "/sensors/{sensor_type}/{name}/active",
            put(sensors::update_active::<R, C, P>),
        )
        // Camera
        .route(
            "/images",
            post(images::process::<R, C, P>).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
}
