//! Signup flow tests against the in-memory directory.

use std::sync::Arc;

use common::AppError;
use domain::{
    Address, DriverSignup, Location, ProfileResponse, ProfileStatus, SignupRequest, StationSignup,
    UserRole,
};
use signup_service_lib::repository::InMemoryDirectory;
use signup_service_lib::service::{SignupManager, SignupService};

fn driver(email: &str, cpf: &str, telefone: &str) -> SignupRequest {
    SignupRequest::Driver(DriverSignup {
        nome: "Maria Silva".to_string(),
        cpf: cpf.to_string(),
        telefone: telefone.to_string(),
        email: email.to_string(),
        senha: "Segura123".to_string(),
        confirmar_senha: "Segura123".to_string(),
        placa: Some("abc-1d23".to_string()),
    })
}

fn station(email: &str, localizacao: Option<Location>) -> SignupRequest {
    SignupRequest::Station(StationSignup {
        cnpj: "11.222.333/0001-81".to_string(),
        nome_fantasia: "Posto Central".to_string(),
        email: email.to_string(),
        telefone: "1134567890".to_string(),
        endereco: Some(Address {
            cep: "01310100".to_string(),
            logradouro: "Av. Paulista".to_string(),
            numero: "1000".to_string(),
            bairro: "Bela Vista".to_string(),
            cidade: "São Paulo".to_string(),
            uf: "sp".to_string(),
            complemento: None,
        }),
        localizacao,
        bandeira: "Shell".to_string(),
        responsavel_nome: "João Souza".to_string(),
        responsavel_telefone: "(11) 98888-7777".to_string(),
        senha: "Segura123".to_string(),
        confirmar_senha: "Segura123".to_string(),
    })
}

fn service() -> (Arc<InMemoryDirectory>, SignupManager) {
    let directory = Arc::new(InMemoryDirectory::new());
    let service = SignupManager::new(directory.clone());
    (directory, service)
}

#[tokio::test]
async fn test_driver_signup_and_profile_lookup() {
    let (directory, service) = service();

    let profile = service
        .register(driver("maria@exemplo.com", "111.444.777-35", "(11) 98765-4321"))
        .await
        .unwrap();
    assert_eq!(profile.license_plate.as_deref(), Some("ABC1D23"));
    assert_eq!(directory.len().await, 1);

    let found = service.get_profile(profile.id).await.unwrap();
    let response = ProfileResponse::from(found);
    assert_eq!(response.role, UserRole::Motorista);
    assert_eq!(response.document, "111.444.777-35");
    assert_eq!(response.phone, "(11) 98765-4321");
    assert_eq!(response.status, ProfileStatus::Active);
    assert!(response.missing_fields.is_empty());
}

#[tokio::test]
async fn test_second_signup_with_same_email_in_other_case_is_rejected() {
    let (directory, service) = service();
    service
        .register(driver("maria@exemplo.com", "111.444.777-35", "11987654321"))
        .await
        .unwrap();

    let err = service
        .register(driver("MARIA@exemplo.com", "529.982.247-25", "11912345678"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { ref field, .. } if field == "email"));
    assert_eq!(directory.len().await, 1);
}

#[tokio::test]
async fn test_same_cpf_with_different_punctuation_is_rejected() {
    let (_, service) = service();
    service
        .register(driver("a@exemplo.com", "111.444.777-35", "11987654321"))
        .await
        .unwrap();

    let err = service
        .register(driver("b@exemplo.com", "11144477735", "11912345678"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { ref field, .. } if field == "cpf"));
}

#[tokio::test]
async fn test_phone_already_in_use_is_rejected() {
    let (_, service) = service();
    service
        .register(driver("a@exemplo.com", "111.444.777-35", "(11) 98765-4321"))
        .await
        .unwrap();

    let err = service
        .register(driver("b@exemplo.com", "529.982.247-25", "11987654321"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { ref field, .. } if field == "telefone"));
}

#[tokio::test]
async fn test_station_status_follows_missing_fields() {
    let (_, service) = service();

    let incomplete = service
        .register(station("posto@exemplo.com", None))
        .await
        .unwrap();
    assert_eq!(incomplete.status, ProfileStatus::Incomplete);
    assert_eq!(
        ProfileResponse::from(&incomplete).missing_fields,
        vec!["Latitude".to_string(), "Longitude".to_string()]
    );

    // CNPJ is now taken
    let err = service
        .register(station(
            "outro@exemplo.com",
            Some(Location {
                lat: -23.56,
                lng: -46.65,
                place_id: None,
            }),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { ref field, .. } if field == "cnpj"));
}

#[tokio::test]
async fn test_complete_station_is_pending() {
    let (_, service) = service();

    let profile = service
        .register(station(
            "posto@exemplo.com",
            Some(Location {
                lat: -23.56,
                lng: -46.65,
                place_id: Some("ChIJ".to_string()),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(profile.status, ProfileStatus::Pending);
    assert_eq!(ProfileResponse::from(&profile).document, "11.222.333/0001-81");
}

#[tokio::test]
async fn test_invalid_form_reports_every_field() {
    let (directory, service) = service();
    let mut request = driver("sem-arroba", "123.456.789-00", "123");
    if let SignupRequest::Driver(ref mut d) = request {
        d.confirmar_senha = "Outra123".to_string();
    }

    let err = service.register(request).await.unwrap_err();
    let fields = err.fields().unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();

    assert_eq!(names, vec!["cpf", "telefone", "email", "confirmar_senha"]);
    assert!(directory.is_empty().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_drivers_with_same_phone_store_one() {
    let directory = Arc::new(InMemoryDirectory::new());
    let service = Arc::new(SignupManager::new(directory.clone()));

    let first = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .register(driver("a@exemplo.com", "111.444.777-35", "11987654321"))
                .await
        })
    };
    let second = {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .register(driver("b@exemplo.com", "529.982.247-25", "(11) 98765-4321"))
                .await
        })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let created = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(created, 1);
    assert!(results.iter().any(|r| matches!(
        r,
        Err(AppError::Conflict { field, .. }) if field == "telefone"
    )));
    assert_eq!(directory.len().await, 1);
}

#[tokio::test]
async fn test_driver_may_reuse_station_contact_phone() {
    let (directory, service) = service();
    service
        .register(station("posto@exemplo.com", None))
        .await
        .unwrap();

    service
        .register(driver("maria@exemplo.com", "111.444.777-35", "1134567890"))
        .await
        .unwrap();

    assert_eq!(directory.len().await, 2);
}
