//! Service layer for signup use cases.

mod signup_service;

pub use signup_service::{SignupManager, SignupService};
