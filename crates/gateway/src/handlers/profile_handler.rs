//! Profile handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::ProfileResponse;

use crate::state::AppState;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_profile))
}

/// Get a profile by ID
#[utoipa::path(
    get,
    path = "/profiles/{id}",
    tag = "Profiles",
    params(
        ("id" = Uuid, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<ProfileResponse>> {
    let Path(id) = id.map_err(|e| AppError::bad_request(e.body_text()))?;
    let profile = state.signup_service.get_profile(id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}
