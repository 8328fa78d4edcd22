//! JSON REST handlers for sensors.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};
use catpoint_domain::error::{CatpointError, NotFoundError};
use catpoint_domain::sensor::{Sensor, SensorType};

use crate::api::status::{StatusResponse, StatusSnapshot};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering a sensor.
#[derive(Deserialize)]
pub struct CreateSensorRequest {
    pub name: String,
    pub sensor_type: SensorType,
}

/// Request body for toggling a sensor.
#[derive(Deserialize)]
pub struct UpdateActiveRequest {
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

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Sensor>),
}

impl IntoResponse for GetResponse {
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

fn identity(sensor_type: &str, name: String) -> Result<Sensor, CatpointError> {
    let sensor_type = sensor_type.parse::<SensorType>()?;
    Sensor::builder().name(name).sensor_type(sensor_type).build()
}

/// `GET /api/sensors`
pub async fn list<R, C, P>(
    State(state): State<AppState<R, C, P>>,
) -> Result<ListResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let sensors = state.security.lock().await.get_sensors().await?;
    Ok(ListResponse::Ok(Json(sensors.into_iter().collect())))
}

/// `GET /api/sensors/{sensor_type}/{name}`
pub async fn get<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    Path((sensor_type, name)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let sensor = identity(&sensor_type, name)?;
    let found = state
        .security
        .lock()
        .await
        .get_sensors()
        .await?
        .take(&sensor)
        .ok_or_else(|| NotFoundError {
            entity: "Sensor",
            id: sensor.to_string(),
        })
        .map_err(CatpointError::from)?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/sensors`
pub async fn create<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    Json(req): Json<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let sensor = Sensor::builder()
        .name(req.name)
        .sensor_type(req.sensor_type)
        .build()?;

    let service = state.security.lock().await;
    service.add_sensor(sensor.clone()).await?;
    let stored = service
        .get_sensors()
        .await?
        .take(&sensor)
        .unwrap_or(sensor);
    Ok(CreateResponse::Created(Json(stored)))
}

/// `DELETE /api/sensors/{sensor_type}/{name}`
pub async fn delete<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    Path((sensor_type, name)): Path<(String, String)>,
) -> Result<DeleteResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let sensor = identity(&sensor_type, name)?;
    state.security.lock().await.remove_sensor(sensor).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/sensors/{sensor_type}/{name}/active`
///
/// Answers with the status snapshot after the alarm rules ran.
pub async fn update_active<R, C, P>(
    State(state): State<AppState<R, C, P>>,
    Path((sensor_type, name)): Path<(String, String)>,
    Json(req): Json<UpdateActiveRequest>,
) -> Result<StatusResponse, ApiError>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let sensor = identity(&sensor_type, name)?;

    let service = state.security.lock().await;
    service.change_sensor_activation(&sensor, req.active).await?;
    let snapshot = StatusSnapshot::read(&service).await?;
    Ok(StatusResponse::Ok(Json(snapshot)))
}
