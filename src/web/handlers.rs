//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::eligibility::CarrierStatus;
use crate::loads::RankedLoad;
use crate::search::{SearchOptions, SearchParams, SearchRequest};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

/// Primary load search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<RankedLoad>>, ApiError> {
    run_search(&state, params, SearchOptions::default()).await
}

/// Backward-compatible load search handler
///
/// Same component as [`search`], with the legacy variant's strict paging
/// parsing and no diagnostic output.
pub async fn load_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<RankedLoad>>, ApiError> {
    run_search(&state, params, SearchOptions::legacy()).await
}

async fn run_search(
    state: &AppState,
    params: SearchParams,
    options: SearchOptions,
) -> Result<Json<Vec<RankedLoad>>, ApiError> {
    if options.log_diagnostics {
        debug!("search params: {:?}", params);
    }

    let request = SearchRequest::from_params(&params, &options)?;
    let results = state.search.execute(&request).await?;

    if options.log_diagnostics {
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        debug!("returning {} loads: {:?}", results.len(), ids);
    }

    Ok(Json(results))
}

/// Query parameters for the eligibility check
#[derive(Debug, Deserialize)]
pub struct EligibilityParams {
    pub mc: Option<String>,
}

/// Carrier eligibility handler
pub async fn eligibility(
    State(state): State<AppState>,
    Query(params): Query<EligibilityParams>,
) -> Result<Json<CarrierStatus>, ApiError> {
    let docket = params
        .mc
        .filter(|mc| !mc.is_empty())
        .ok_or(ApiError::MissingParameter("mc"))?;

    let status = state
        .eligibility
        .check(&docket)
        .await?
        .ok_or(ApiError::CarrierNotFound)?;

    Ok(Json(status))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
