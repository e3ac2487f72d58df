//! Directory domain model.
//!
//! # Responsibility
//! - Define departments, locations, positions and their associations.
//! - Validate inputs at construction through value-object factories.
//!
//! # Invariants
//! - `Department` is the only owner of association records.
//! - `Location` and `Position` hold non-owning department ids.
//! - Every timestamp is read from an injected `Clock`.

pub mod department;
pub mod hierarchy;
pub mod location;
pub mod position;
pub mod value;

pub use department::{DepartmentId, DepartmentLocationId, DepartmentPositionId};
pub use location::LocationId;
pub use position::PositionId;
