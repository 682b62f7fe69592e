//! Repository layer for data access.

mod profile_directory;

pub use profile_directory::{InMemoryDirectory, ProfileDirectory};

#[cfg(any(test, feature = "test-utils"))]
pub use profile_directory::MockProfileDirectory;
