//! Arming control endpoint.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};
use catpoint_domain::status::ArmingStatus;

use crate::api::status::{StatusResponse, StatusSnapshot};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for changing the arming status.
#[derive(Deserialize)]
pub struct UpdateArmingRequest {
    pub status: ArmingStatus,
}

/// `PUT /api/arming`
///
/// Answers with the status snapshot after the change.
pub async fn update<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    Json(req): Json<UpdateArmingRequest>,
) -> Result<StatusResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let service = state.security.lock().await;
    service.set_arming_status(req.status).await?;
    let snapshot = StatusSnapshot::read(&service).await?;
    Ok(StatusResponse::Ok(Json(snapshot)))
}
