//! HTTP handlers.

pub mod health_handler;
pub mod profile_handler;
pub mod signup_handler;
pub mod validation_handler;

pub use health_handler::health_routes;
pub use profile_handler::profile_routes;
pub use signup_handler::signup_routes;
pub use validation_handler::validation_routes;
