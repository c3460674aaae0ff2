//! JSON REST handlers for sensors.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};
use pothub_domain::error::PotHubError;
use pothub_domain::id::{PotId, SensorId};
use pothub_domain::sensor::Sensor;

use crate::api::StatusBody;
use crate::error::ApiError;
use crate::extract::StrictJson;
use crate::state::AppState;

/// Request body for creating a sensor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSensorRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub status: String,
    #[serde(default)]
    pub pot_id: Option<i64>,
}

impl CreateSensorRequest {
    fn into_sensor(self) -> Result<Sensor, PotHubError> {
        Sensor::builder()
            .id(self.id)
            .kind(self.kind)
            .value(self.value)
            .status(self.status)
            .pot_id(self.pot_id.map(PotId::from_raw))
            .build()
    }
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
    /// The root-level `/sensors/add` alias answers `200 OK` like the first API did.
    Added(Json<Sensor>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Added(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(StatusBody {
                status: "Sensor deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /api/sensors`
pub async fn list<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
) -> Result<ListResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let sensors = state.resource_service.list_sensors().await?;
    Ok(ListResponse::Ok(Json(sensors)))
}

/// `POST /api/sensors`
pub async fn create<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    StrictJson(req): StrictJson<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let created = state
        .resource_service
        .create_sensor(req.into_sensor()?)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /sensors/add`
pub async fn add<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    StrictJson(req): StrictJson<CreateSensorRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let added = state
        .resource_service
        .create_sensor(req.into_sensor()?)
        .await?;
    Ok(CreateResponse::Added(Json(added)))
}

/// `DELETE /api/sensors/:id`
pub async fn delete<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    state
        .resource_service
        .delete_sensor(SensorId::new(id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
