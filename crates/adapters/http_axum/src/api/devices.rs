//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};
use pothub_domain::device::Device;
use pothub_domain::id::{DeviceId, PotId};

use crate::api::StatusBody;
use crate::error::ApiError;
use crate::extract::StrictJson;
use crate::state::AppState;

/// Request body for creating a device.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDeviceRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub pot_id: Option<i64>,
}

/// Request body for replacing a device's status.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
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
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the status update endpoint.
pub enum UpdateStatusResponse {
    Updated,
}

impl IntoResponse for UpdateStatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated => Json(StatusBody {
                status: "Device status updated",
            })
            .into_response(),
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
                status: "Device deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
) -> Result<ListResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let devices = state.resource_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `POST /api/devices`
pub async fn create<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    StrictJson(req): StrictJson<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let device = Device::builder()
        .id(req.id)
        .kind(req.kind)
        .status(req.status)
        .pot_id(req.pot_id.map(PotId::from_raw))
        .build()?;

    let created = state.resource_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/devices/:id/status`
pub async fn update_status<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    Path(id): Path<String>,
    StrictJson(req): StrictJson<UpdateStatusRequest>,
) -> Result<UpdateStatusResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    state
        .resource_service
        .update_device_status(DeviceId::new(id), req.status)
        .await?;
    Ok(UpdateStatusResponse::Updated)
}

/// `DELETE /api/devices/:id`
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
        .delete_device(DeviceId::new(id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
