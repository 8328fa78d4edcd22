//! Camera frame endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};
use catpoint_domain::image::Image;

use crate::api::status::StatusSnapshot;
use crate::error::ApiError;
use crate::state::AppState;

/// Outcome of analysing one frame.
#[derive(Debug, Serialize)]
pub struct ImageReport {
    pub cat_detected: bool,
    #[serde(flatten)]
    pub status: StatusSnapshot,
}

/// Possible responses from the image endpoint.
pub enum ProcessResponse {
    Ok(Json<ImageReport>),
}

impl IntoResponse for ProcessResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/images`
///
/// The request body is the raw image.
pub async fn process<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    body: Bytes,
) -> Result<ProcessResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let image = Image::new(body.to_vec());
    tracing::debug!(bytes = image.len(), "image received");

    let service = state.security.lock().await;
    let cat_detected = service.process_image(&image).await?;
    let status = StatusSnapshot::read(&service).await?;
    Ok(ProcessResponse::Ok(Json(ImageReport {
        cat_detected,
        status,
    })))
}
