//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::checks::ValueCheck;
use crate::handlers::health_handler::HealthResponse;
use crate::handlers::validation_handler::ValidationRequest;
use domain::{
    Address, DriverSignup, FieldError, Location, PasswordCheck, ProfileResponse, ProfileStatus,
    StationSignup, UserRole,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::validation_handler::check_field,
        crate::handlers::validation_handler::check_password,
        crate::handlers::signup_handler::signup_driver,
        crate::handlers::signup_handler::signup_station,
        crate::handlers::profile_handler::get_profile,
    ),
    components(
        schemas(
            HealthResponse,
            ValidationRequest,
            ValueCheck,
            PasswordCheck,
            DriverSignup,
            StationSignup,
            Address,
            Location,
            ProfileResponse,
            ProfileStatus,
            UserRole,
            FieldError,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Validation", description = "Per-field checks and display masks"),
        (name = "Signup", description = "Driver and station registration"),
        (name = "Profiles", description = "Registered profiles"),
    )
)]
pub struct ApiDoc;
