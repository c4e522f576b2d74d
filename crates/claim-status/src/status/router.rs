use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use super::gateway::ClaimGateway;
use super::service::{ClaimStatusError, ClaimStatusService};
use super::view::ClaimStatusView;
use crate::scenarios::ClaimRecord;

/// Ad-hoc evaluation of a gateway payload.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub claim: ClaimRecord,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the claim status endpoints.
pub fn claim_status_router<G>(service: Arc<ClaimStatusService<G>>) -> Router
where
    G: ClaimGateway + 'static,
{
    Router::new()
        .route("/api/v1/claim-status/evaluate", post(evaluate_handler::<G>))
        .route("/api/v1/claim-status/:unique_number", get(status_handler::<G>))
        .with_state(service)
}

pub(crate) async fn status_handler<G>(
    State(service): State<Arc<ClaimStatusService<G>>>,
    Path(unique_number): Path<String>,
) -> Response
where
    G: ClaimGateway + 'static,
{
    let today = Local::now().date_naive();
    view_response(service.status(&unique_number, today))
}

pub(crate) async fn evaluate_handler<G>(
    State(service): State<Arc<ClaimStatusService<G>>>,
    Json(request): Json<EvaluateRequest>,
) -> Response
where
    G: ClaimGateway + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    view_response(service.evaluate(&request.claim, today))
}

fn view_response(result: Result<ClaimStatusView, ClaimStatusError>) -> Response {
    match result {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => {
            let status = match &err {
                ClaimStatusError::NotFound(_) => StatusCode::NOT_FOUND,
                ClaimStatusError::Gateway(source) => {
                    warn!(error = %source, "claim gateway request failed");
                    StatusCode::BAD_GATEWAY
                }
                ClaimStatusError::MissingClaimDetails => {
                    error!("claim record has no claim details");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            let payload = json!({ "error": err.to_string() });
            (status, Json(payload)).into_response()
        }
    }
}
