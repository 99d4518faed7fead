//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
};
use tracing::debug;

use crate::domain::VoyageId;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/:carrier", get(carrier_info))
        .route("/:carrier/:voyage", get(voyage))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Send a bare visit to the default carrier.
async fn home(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/{}", state.default_carrier))
}

/// Describe a supported carrier.
async fn carrier_info(
    State(state): State<AppState>,
    Path(carrier): Path<String>,
) -> Result<Json<CarrierResponse>, AppError> {
    let fetcher = state
        .fetchers
        .get(&carrier)
        .ok_or_else(|| AppError::unknown_carrier(&carrier))?;

    Ok(Json(CarrierResponse::from_carrier(fetcher.carrier())))
}

/// Look up where a voyage is right now.
async fn voyage(
    State(state): State<AppState>,
    Path((carrier, number)): Path<(String, String)>,
) -> Result<Json<VoyageResponse>, AppError> {
    let fetcher = state
        .fetchers
        .get(&carrier)
        .ok_or_else(|| AppError::unknown_carrier(&carrier))?;

    let voyage_id = VoyageId::parse(&number).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let found = fetcher
        .get_voyage(&voyage_id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("No current position for voyage {voyage_id}"),
        })?;

    Ok(Json(VoyageResponse::from_voyage(fetcher.carrier(), &found)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl AppError {
    fn unknown_carrier(code: &str) -> Self {
        AppError::NotFound {
            message: format!("Unknown carrier: {code}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        debug!(status = status.as_u16(), "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
