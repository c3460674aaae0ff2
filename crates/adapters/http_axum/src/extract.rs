//! Strict JSON request extraction.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use pothub_domain::error::ValidationError;

use crate::error::ApiError;

/// Like [`Json`], but every rejection (wrong content type, syntax error,
/// missing or unknown field, wrong type) becomes a
/// [`ValidationError::MalformedBody`] rendered through [`ApiError`].
///
/// Request types decoded with this extractor are expected to carry
/// `#[serde(deny_unknown_fields)]`.
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::MalformedBody(rejection.body_text()).into()),
        }
    }
}
