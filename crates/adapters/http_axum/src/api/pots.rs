//! JSON REST handlers for pots.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};
use pothub_domain::error::ValidationError;
use pothub_domain::id::PotId;
use pothub_domain::pot::{NewPot, Pot};

use crate::api::StatusBody;
use crate::error::ApiError;
use crate::extract::StrictJson;
use crate::state::AppState;

/// Request body for creating a pot. The id is always assigned by the store.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePotRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pot>>),
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
    Created(Json<Pot>),
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
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(StatusBody {
                status: "Pot deleted",
            })
            .into_response(),
        }
    }
}

/// `GET /api/pots`
pub async fn list<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
) -> Result<ListResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let pots = state.resource_service.list_pots().await?;
    Ok(ListResponse::Ok(Json(pots)))
}

/// `POST /api/pots`
pub async fn create<S, D, P, A>(
    State(state): State<AppState<S, D, P, A>>,
    StrictJson(req): StrictJson<CreatePotRequest>,
) -> Result<CreateResponse, ApiError>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    let pot = NewPot::new(req.name)?;
    let created = state.resource_service.create_pot(pot).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/pots/:id`
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
    let pot_id = PotId::from_str(&id).map_err(|_| ValidationError::InvalidPotId(id))?;
    state.resource_service.delete_pot(pot_id).await?;
    Ok(DeleteResponse::Deleted)
}
