//! Status snapshot endpoint.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::error::CatpointError;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Current arming and alarm state of the controller.
#[derive(Debug, Serialize)]
pub struct StatusSnapshot {
    pub arming_status: ArmingStatus,
    pub arming_description: &'static str,
    pub alarm_status: AlarmStatus,
    pub alarm_description: &'static str,
    pub any_sensor_active: bool,
}

impl StatusSnapshot {
    /// Read the snapshot through the service.
    pub async fn read<R, C, P>(service: &SecurityService<R, C, P>) -> Result<Self, CatpointError>
    where
        R: SecurityRepository,
        C: ImageClassifier,
        P: EventPublisher,
    {
        let arming_status = service.get_arming_status().await?;
        let alarm_status = service.get_alarm_status().await?;
        Ok(Self {
            arming_status,
            arming_description: arming_status.description(),
            alarm_status,
            alarm_description: alarm_status.description(),
            any_sensor_active: service.any_sensor_active().await?,
        })
    }
}

/// Possible responses from the status endpoints.
pub enum StatusResponse {
    Ok(Json<StatusSnapshot>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/status`
pub async fn get<R, C, P>(
    State(state): State<AppState<R, C, P>>,
) -> Result<StatusResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let service = state.security.lock().await;
    let snapshot = StatusSnapshot::read(&service).await?;
    Ok(StatusResponse::Ok(Json(snapshot)))
}
