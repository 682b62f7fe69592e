//! Integration tests for API endpoints.
//!
//! Requests go through the full router, backed by an in-memory directory or
//! a mocked one.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::AppError;
use gateway_lib::config::GatewayConfig;
use gateway_lib::state::AppState;
use gateway_lib::{build_app, in_memory_state};
use signup_service_lib::repository::MockProfileDirectory;
use signup_service_lib::service::SignupManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    build_app(in_memory_state(GatewayConfig::default()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn driver_body() -> Value {
    json!({
        "nome": "Maria Silva",
        "cpf": "111.444.777-35",
        "telefone": "(11) 98765-4321",
        "email": "maria@exemplo.com",
        "senha": "Segura123",
        "confirmar_senha": "Segura123",
        "placa": "ABC1D23"
    })
}

fn station_body() -> Value {
    json!({
        "cnpj": "11.222.333/0001-81",
        "nome_fantasia": "Posto Central",
        "email": "contato@postocentral.com.br",
        "telefone": "(11) 3456-7890",
        "endereco": {
            "cep": "01310-100",
            "logradouro": "Av. Paulista",
            "numero": "1000",
            "bairro": "Bela Vista",
            "cidade": "São Paulo",
            "uf": "SP"
        },
        "bandeira": "Ipiranga",
        "responsavel_nome": "João Souza",
        "responsavel_telefone": "(11) 98888-7777",
        "senha": "Segura123",
        "confirmar_senha": "Segura123"
    })
}

// =============================================================================
// Health and Docs
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gateway");
}

#[tokio::test]
async fn test_openapi_document_lists_signup_paths() {
    let (status, body) = send(&app(), "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/signup/motorista"].is_object());
    assert!(body["paths"]["/validation/{kind}"].is_object());
}

// =============================================================================
// Validation Endpoints
// =============================================================================

#[tokio::test]
async fn test_validate_cpf() {
    let app = app();

    let (status, body) = send(&app, "POST", "/validation/cpf", Some(json!({ "value": "11144477735" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "valid": true, "masked": "111.444.777-35" }));

    let (_, body) = send(&app, "POST", "/validation/cpf", Some(json!({ "value": "111.111.111-11" }))).await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn test_validate_cnpj_and_phone() {
    let app = app();

    let (_, body) = send(&app, "POST", "/validation/cnpj", Some(json!({ "value": "11222333000181" }))).await;
    assert_eq!(body, json!({ "valid": true, "masked": "11.222.333/0001-81" }));

    let (_, body) = send(&app, "POST", "/validation/phone", Some(json!({ "value": "11987654321" }))).await;
    assert_eq!(body, json!({ "valid": true, "masked": "(11) 98765-4321" }));
}

#[tokio::test]
async fn test_validate_email_has_null_mask() {
    let (_, body) = send(&app(), "POST", "/validation/email", Some(json!({ "value": "a@b" }))).await;
    assert_eq!(body, json!({ "valid": false, "masked": null }));
}

#[tokio::test]
async fn test_validate_unknown_kind_is_not_found() {
    let (status, body) = send(&app(), "POST", "/validation/rg", Some(json!({ "value": "1" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validate_password_lists_failed_rules() {
    let (status, body) = send(&app(), "POST", "/validation/password", Some(json!({ "value": "abc" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_valid"], false);
    assert_eq!(
        body["errors"],
        json!(["Mínimo 8 caracteres", "Uma letra maiúscula", "Um número"])
    );
}

#[tokio::test]
async fn test_validation_rejects_missing_value() {
    let (status, body) = send(&app(), "POST", "/validation/cep", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Signup Endpoints
// =============================================================================

#[tokio::test]
async fn test_driver_signup_then_fetch_profile() {
    let app = app();

    let (status, created) = send(&app, "POST", "/signup/motorista", Some(driver_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "motorista");
    assert_eq!(created["status"], "active");
    assert_eq!(created["document"], "111.444.777-35");
    assert!(created.get("password_hash").is_none());

    let uri = format!("/profiles/{}", created["id"].as_str().unwrap());
    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "maria@exemplo.com");
}

#[tokio::test]
async fn test_duplicate_driver_email_conflicts() {
    let app = app();
    send(&app, "POST", "/signup/motorista", Some(driver_body())).await;

    let mut second = driver_body();
    second["cpf"] = json!("529.982.247-25");
    second["email"] = json!("MARIA@exemplo.com");
    let (status, body) = send(&app, "POST", "/signup/motorista", Some(second)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email já cadastrado no sistema");
    assert_eq!(body["error"]["fields"][0]["field"], "email");
}

#[tokio::test]
async fn test_driver_signup_reports_every_invalid_field() {
    let (status, body) = send(
        &app(),
        "POST",
        "/signup/motorista",
        Some(json!({ "nome": "Maria", "cpf": "123" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["cpf", "telefone", "email", "senha", "confirmar_senha"]);
}

#[tokio::test]
async fn test_station_without_location_is_incomplete() {
    let (status, body) = send(&app(), "POST", "/signup/posto", Some(station_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["role"], "posto");
    assert_eq!(body["status"], "incomplete");
    assert_eq!(body["missing_fields"], json!(["Latitude", "Longitude"]));
}

#[tokio::test]
async fn test_complete_station_is_pending() {
    let mut station = station_body();
    station["localizacao"] = json!({ "lat": -23.5614, "lng": -46.6559 });

    let (status, body) = send(&app(), "POST", "/signup/posto", Some(station)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert!(body.get("missing_fields").is_none());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/signup/posto")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Profile Endpoints
// =============================================================================

#[tokio::test]
async fn test_unknown_profile_is_not_found() {
    let uri = format!("/profiles/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app(), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_profile_id_is_bad_request() {
    let (status, body) = send(&app(), "GET", "/profiles/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

// =============================================================================
// Directory Failures
// =============================================================================

#[tokio::test]
async fn test_directory_outage_is_service_unavailable() {
    let mut directory = MockProfileDirectory::new();
    directory
        .expect_email_exists()
        .returning(|_| Err(AppError::service_unavailable("profile directory")));
    directory.expect_create().never();

    let state = AppState::new(
        Arc::new(SignupManager::new(Arc::new(directory))),
        GatewayConfig::default(),
    );
    let (status, body) = send(&build_app(state), "POST", "/signup/motorista", Some(driver_body())).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}
