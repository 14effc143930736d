//! API error type and response mapping

use crate::eligibility::EligibilityError;
use crate::search::ParamError;
use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Request failure, mapped onto a status code and a JSON error body
///
/// Bodies are free-text messages under an `error` key; callers should treat
/// them as hints, not a stable contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("Carrier not found")]
    CarrierNotFound,
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::CarrierNotFound => StatusCode::NOT_FOUND,
            Self::Param(_) | Self::Store(_) | Self::Eligibility(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
