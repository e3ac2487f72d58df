//! Department aggregate and its association records.
//!
//! # Responsibility
//! - Own `DepartmentLocation` / `DepartmentPosition` association records.
//! - Hold hierarchy fields (`parent_id`, `path`, `depth`) as supplied.
//!
//! # Invariants
//! - `id` is never nil for a department built through `create`.
//! - Associations are additive; duplicates to the same foreign id are kept.
//! - Removing an association matches on the foreign id and removes the first
//!   match in insertion order.
//! - Association changes do not stamp `updated_at`.
//! - Hierarchy fields are not checked for cycles or depth consistency here;
//!   see `model::hierarchy` for opt-in diagnostics.

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};
use crate::model::value::{DepartmentName, Identifier, Path};
use crate::model::{LocationId, PositionId};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type DepartmentId = Uuid;
pub type DepartmentLocationId = Uuid;
pub type DepartmentPositionId = Uuid;

/// Join record linking a department to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentLocation {
    /// Generated when the association is created.
    pub id: DepartmentLocationId,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Associated location; not required to exist.
    pub location_id: LocationId,
    /// Clock time at association; never changes.
    pub created_at: DateTime<Utc>,
}

impl DepartmentLocation {
    fn new(department_id: DepartmentId, location_id: LocationId, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            department_id,
            location_id,
            created_at: now,
        }
    }
}

/// Join record linking a department to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPosition {
    /// Generated when the association is created.
    pub id: DepartmentPositionId,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Associated position; not required to exist.
    pub position_id: PositionId,
    /// Clock time at association; never changes.
    pub created_at: DateTime<Utc>,
}

impl DepartmentPosition {
    fn new(department_id: DepartmentId, position_id: PositionId, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            department_id,
            position_id,
            created_at: now,
        }
    }
}

/// Plain persisted shape of a department, used for rehydration.
///
/// String fields hold raw stored values; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDepartment {
    pub id: DepartmentId,
    pub parent_id: Option<DepartmentId>,
    /// Raw `DepartmentName` value.
    pub name: String,
    /// Raw `Identifier` value.
    pub identifier: String,
    /// Raw `Path` value.
    pub path: String,
    pub depth: i16,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Association records in insertion order.
    pub locations: Vec<DepartmentLocation>,
    /// Association records in insertion order.
    pub positions: Vec<DepartmentPosition>,
}

/// Central aggregate of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    id: DepartmentId,
    parent_id: Option<DepartmentId>,
    name: DepartmentName,
    identifier: Identifier,
    path: Path,
    depth: i16,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    locations: Vec<DepartmentLocation>,
    positions: Vec<DepartmentPosition>,
}

impl Department {
    /// Creates a department and one association record per supplied id.
    ///
    /// # Errors
    /// - `Validation` on field `Id` when `id` is nil. Other arguments are
    ///   already validated value objects.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: DepartmentId,
        parent_id: Option<DepartmentId>,
        name: DepartmentName,
        identifier: Identifier,
        path: Path,
        depth: i16,
        location_ids: impl IntoIterator<Item = LocationId>,
        position_ids: impl IntoIterator<Item = PositionId>,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            debug!("event=department_create module=department status=error error_code=nil_id");
            return Err(DomainError::validation(
                None,
                "ID cannot be null or empty.",
                Some("Id"),
            ));
        }

        let now = clock.now();
        let locations = location_ids
            .into_iter()
            .map(|location_id| DepartmentLocation::new(id, location_id, now))
            .collect::<Vec<_>>();
        let positions = position_ids
            .into_iter()
            .map(|position_id| DepartmentPosition::new(id, position_id, now))
            .collect::<Vec<_>>();

        debug!(
            "event=department_create module=department status=ok locations={} positions={}",
            locations.len(),
            positions.len()
        );

        Ok(Self {
            id,
            parent_id,
            name,
            identifier,
            path,
            depth,
            is_active: true,
            created_at: now,
            updated_at: None,
            locations,
            positions,
        })
    }

    /// Rebuilds a department from storage without re-validating it.
    pub fn from_persisted(record: PersistedDepartment) -> Self {
        Self {
            id: record.id,
            parent_id: record.parent_id,
            name: DepartmentName::from_persisted(record.name),
            identifier: Identifier::from_persisted(record.identifier),
            path: Path::from_persisted(record.path),
            depth: record.depth,
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
            locations: record.locations,
            positions: record.positions,
        }
    }

    /// Snapshot of every field, including association records.
    pub fn to_persisted(&self) -> PersistedDepartment {
        PersistedDepartment {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name.as_str().to_string(),
            identifier: self.identifier.as_str().to_string(),
            path: self.path.as_str().to_string(),
            depth: self.depth,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            locations: self.locations.clone(),
            positions: self.positions.clone(),
        }
    }

    /// Overwrites every editable field and stamps `updated_at`.
    ///
    /// Always succeeds: inputs are validated by their value-object factories.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: DepartmentName,
        identifier: Identifier,
        parent_id: Option<DepartmentId>,
        path: Path,
        depth: i16,
        is_active: bool,
        clock: &dyn Clock,
    ) -> DomainResult<&Self> {
        self.name = name;
        self.identifier = identifier;
        self.parent_id = parent_id;
        self.path = path;
        self.depth = depth;
        self.is_active = is_active;
        self.updated_at = Some(clock.now());
        debug!("event=department_update module=department status=ok");
        Ok(self)
    }

    /// Switches between active and inactive; stamps `updated_at`.
    pub fn set_active(&mut self, active: bool, clock: &dyn Clock) {
        self.is_active = active;
        self.updated_at = Some(clock.now());
        debug!("event=department_set_active module=department status=ok active={active}");
    }

    /// Re-parents this department. Callers are responsible for avoiding cycles.
    pub fn set_parent(&mut self, parent_id: Option<DepartmentId>, clock: &dyn Clock) {
        self.parent_id = parent_id;
        self.updated_at = Some(clock.now());
        debug!(
            "event=department_set_parent module=department status=ok root={}",
            parent_id.is_none()
        );
    }

    /// Appends one association per id. Existing associations are kept.
    pub fn set_positions(
        &mut self,
        position_ids: impl IntoIterator<Item = PositionId>,
        clock: &dyn Clock,
    ) {
        let now = clock.now();
        let id = self.id;
        let before = self.positions.len();
        self.positions.extend(
            position_ids
                .into_iter()
                .map(|position_id| DepartmentPosition::new(id, position_id, now)),
        );
        debug!(
            "event=department_set_positions module=department status=ok added={} total={}",
            self.positions.len() - before,
            self.positions.len()
        );
    }

    /// Removes the first association to `position_id` and returns that id.
    ///
    /// # Errors
    /// - `NotFound` when no association references `position_id`.
    pub fn delete_positions(&mut self, position_id: PositionId) -> DomainResult<PositionId> {
        let Some(index) = self
            .positions
            .iter()
            .position(|association| association.position_id == position_id)
        else {
            debug!("event=department_delete_position module=department status=error error_code=not_found");
            return Err(DomainError::not_found(
                None,
                format!("Position with id: {position_id} does not exist."),
                None,
            ));
        };

        let removed = self.positions.remove(index);
        debug!("event=department_delete_position module=department status=ok");
        Ok(removed.position_id)
    }

    /// Appends one association per id. Existing associations are kept.
    pub fn set_locations(
        &mut self,
        location_ids: impl IntoIterator<Item = LocationId>,
        clock: &dyn Clock,
    ) {
        let now = clock.now();
        let id = self.id;
        let before = self.locations.len();
        self.locations.extend(
            location_ids
                .into_iter()
                .map(|location_id| DepartmentLocation::new(id, location_id, now)),
        );
        debug!(
            "event=department_set_locations module=department status=ok added={} total={}",
            self.locations.len() - before,
            self.locations.len()
        );
    }

    /// Removes the first association to `location_id` and returns that id.
    ///
    /// # Errors
    /// - `NotFound` when no association references `location_id`.
    pub fn delete_locations(&mut self, location_id: LocationId) -> DomainResult<LocationId> {
        let Some(index) = self
            .locations
            .iter()
            .position(|association| association.location_id == location_id)
        else {
            debug!("event=department_delete_location module=department status=error error_code=not_found");
            return Err(DomainError::not_found(
                None,
                format!("Location with id: {location_id} does not exist."),
                None,
            ));
        };

        let removed = self.locations.remove(index);
        debug!("event=department_delete_location module=department status=ok");
        Ok(removed.location_id)
    }

    /// Caller-supplied stable identity.
    pub fn id(&self) -> DepartmentId {
        self.id
    }

    /// Parent department, `None` for roots. May not exist or may form a cycle.
    pub fn parent_id(&self) -> Option<DepartmentId> {
        self.parent_id
    }

    pub fn name(&self) -> &DepartmentName {
        &self.name
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Caller-supplied depth. Not verified against the actual tree.
    pub fn depth(&self) -> i16 {
        self.depth
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Clock time of `create`.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the last stamping mutation, `None` before the first one.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Location associations in insertion order. May repeat a location.
    pub fn locations(&self) -> &[DepartmentLocation] {
        &self.locations
    }

    /// Position associations in insertion order. May repeat a position.
    pub fn positions(&self) -> &[DepartmentPosition] {
        &self.positions
    }

    /// Foreign location ids of `locations()`, in the same order.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.iter().map(|association| association.location_id)
    }

    /// Foreign position ids of `positions()`, in the same order.
    pub fn position_ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.positions.iter().map(|association| association.position_id)
    }
}
