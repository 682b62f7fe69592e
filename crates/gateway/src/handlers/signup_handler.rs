//! Signup handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use common::AppResult;
use domain::{DriverSignup, ProfileResponse, SignupRequest, StationSignup};

use crate::extractors::FormJson;
use crate::state::AppState;

/// Create signup routes
pub fn signup_routes() -> Router<AppState> {
    Router::new()
        .route("/motorista", post(signup_driver))
        .route("/posto", post(signup_station))
}

/// Register a driver
#[utoipa::path(
    post,
    path = "/signup/motorista",
    tag = "Signup",
    request_body = DriverSignup,
    responses(
        (status = 201, description = "Driver registered", body = ProfileResponse),
        (status = 400, description = "Invalid fields"),
        (status = 409, description = "Email, CPF or phone already registered")
    )
)]
pub async fn signup_driver(
    State(state): State<AppState>,
    FormJson(payload): FormJson<DriverSignup>,
) -> AppResult<(StatusCode, Json<ProfileResponse>)> {
    register(&state, SignupRequest::Driver(payload)).await
}

/// Register a fuel station
#[utoipa::path(
    post,
    path = "/signup/posto",
    tag = "Signup",
    request_body = StationSignup,
    responses(
        (status = 201, description = "Station registered, pending or incomplete", body = ProfileResponse),
        (status = 400, description = "Invalid fields"),
        (status = 409, description = "Email or CNPJ already registered")
    )
)]
pub async fn signup_station(
    State(state): State<AppState>,
    FormJson(payload): FormJson<StationSignup>,
) -> AppResult<(StatusCode, Json<ProfileResponse>)> {
    register(&state, SignupRequest::Station(payload)).await
}

async fn register(
    state: &AppState,
    request: SignupRequest,
) -> AppResult<(StatusCode, Json<ProfileResponse>)> {
    let profile = state.signup_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}
