//! Signup Service Library
//!
//! Registers driver (`motorista`) and fuel station (`posto`) accounts:
//! form validation, duplicate detection, password hashing and storage
//! through a pluggable [`ProfileDirectory`](repository::ProfileDirectory).
//! Embedded by the gateway, which owns the HTTP surface.

pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::repository::{InMemoryDirectory, ProfileDirectory};
use crate::service::{SignupManager, SignupService};

/// Build a signup service backed by a fresh in-memory directory.
pub fn in_memory() -> Arc<dyn SignupService> {
    let directory: Arc<dyn ProfileDirectory> = Arc::new(InMemoryDirectory::new());
    Arc::new(SignupManager::new(directory))
}
