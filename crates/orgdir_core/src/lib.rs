//! Core domain logic for the organizational directory.
//! This crate is the single source of truth for directory invariants.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CoreConfig;
pub use error::{DomainError, DomainResult, ErrorKind};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::department::{
    Department, DepartmentId, DepartmentLocation, DepartmentPosition, PersistedDepartment,
};
pub use model::hierarchy::{computed_depth, depth_mismatches, would_create_cycle};
pub use model::location::{Location, LocationId, PersistedLocation};
pub use model::position::{PersistedPosition, Position, PositionId};
pub use model::value::{Address, DepartmentName, Identifier, LocationName, Path, TimeZone};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
