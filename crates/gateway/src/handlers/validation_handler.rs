//! Field validation handlers used by signup forms while the user types.

use axum::{extract::Path, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{validate_password, PasswordCheck};

use crate::checks::{check_value, ValueCheck, ValueKind};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Value to check
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ValidationRequest {
    #[validate(length(max = 256, message = "Valor muito longo"))]
    #[schema(example = "111.444.777-35")]
    pub value: String,
}

/// Create validation routes
pub fn validation_routes() -> Router<AppState> {
    Router::new()
        .route("/password", post(check_password))
        .route("/:kind", post(check_field))
}

/// Validate and mask a single field
#[utoipa::path(
    post,
    path = "/validation/{kind}",
    tag = "Validation",
    params(
        ("kind" = String, Path, description = "One of cpf, cnpj, email, phone, cep, plate")
    ),
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Check result", body = ValueCheck),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Unknown field kind")
    )
)]
pub async fn check_field(
    Path(kind): Path<String>,
    ValidatedJson(payload): ValidatedJson<ValidationRequest>,
) -> AppResult<Json<ValueCheck>> {
    let kind: ValueKind = kind.parse()?;
    Ok(Json(check_value(kind, &payload.value)))
}

/// Check password strength rules
#[utoipa::path(
    post,
    path = "/validation/password",
    tag = "Validation",
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Failed rules, in display order", body = PasswordCheck),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn check_password(
    ValidatedJson(payload): ValidatedJson<ValidationRequest>,
) -> Json<PasswordCheck> {
    Json(validate_password(&payload.value))
}
