//! Location entity.
//!
//! # Responsibility
//! - Describe a physical site with name, address and time zone.
//! - Keep a non-owning index of departments located at the site.
//!
//! # Invariants
//! - `id` is never nil for a location built through `create`.
//! - Adding or removing a department reference stamps `updated_at`; a failed
//!   removal leaves it untouched.

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};
use crate::model::department::{Department, DepartmentId};
use crate::model::value::{Address, LocationName, TimeZone};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type LocationId = Uuid;

/// Plain persisted shape of a location, used for rehydration.
///
/// String fields hold raw stored values; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedLocation {
    pub id: LocationId,
    /// Raw `LocationName` value.
    pub name: String,
    /// Raw `Address` value.
    pub address: String,
    /// Raw `TimeZone` value.
    pub time_zone: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Non-owning department references in insertion order.
    pub department_ids: Vec<DepartmentId>,
}

/// Physical site departments can be located at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    id: LocationId,
    name: LocationName,
    address: Address,
    time_zone: TimeZone,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    department_ids: Vec<DepartmentId>,
}

impl Location {
    /// Creates an active location.
    ///
    /// # Errors
    /// - `Validation` on field `Id` when `id` is nil.
    pub fn create(
        id: LocationId,
        name: LocationName,
        address: Address,
        time_zone: TimeZone,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            debug!("event=location_create module=location status=error error_code=nil_id");
            return Err(DomainError::validation(
                None,
                "ID cannot be null or empty.",
                Some("Id"),
            ));
        }

        debug!("event=location_create module=location status=ok");
        Ok(Self {
            id,
            name,
            address,
            time_zone,
            is_active: true,
            created_at: clock.now(),
            updated_at: None,
            department_ids: Vec::new(),
        })
    }

    /// Rebuilds a location from storage without re-validating it.
    pub fn from_persisted(record: PersistedLocation) -> Self {
        Self {
            id: record.id,
            name: LocationName::from_persisted(record.name),
            address: Address::from_persisted(record.address),
            time_zone: TimeZone::from_persisted(record.time_zone),
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
            department_ids: record.department_ids,
        }
    }

    /// Snapshot of every field, including department references.
    pub fn to_persisted(&self) -> PersistedLocation {
        PersistedLocation {
            id: self.id,
            name: self.name.as_str().to_string(),
            address: self.address.as_str().to_string(),
            time_zone: self.time_zone.as_str().to_string(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            department_ids: self.department_ids.clone(),
        }
    }

    /// Overwrites name, address and time zone; always succeeds.
    pub fn update(
        &mut self,
        name: LocationName,
        address: Address,
        time_zone: TimeZone,
        clock: &dyn Clock,
    ) -> DomainResult<&Self> {
        self.name = name;
        self.address = address;
        self.time_zone = time_zone;
        self.updated_at = Some(clock.now());
        debug!("event=location_update module=location status=ok");
        Ok(self)
    }

    /// Switches between active and inactive; stamps `updated_at`.
    pub fn set_active(&mut self, active: bool, clock: &dyn Clock) {
        self.is_active = active;
        self.updated_at = Some(clock.now());
        debug!("event=location_set_active module=location status=ok active={active}");
    }

    /// Records that `department` is located here. Does not create a
    /// `DepartmentLocation`; that record belongs to the department.
    pub fn set_departments(&mut self, department: &Department, clock: &dyn Clock) {
        self.department_ids.push(department.id());
        self.updated_at = Some(clock.now());
        debug!(
            "event=location_set_department module=location status=ok total={}",
            self.department_ids.len()
        );
    }

    /// Drops the first reference to `department_id`.
    ///
    /// # Errors
    /// - `NotFound` when the department is not referenced.
    pub fn delete_departments(
        &mut self,
        department_id: DepartmentId,
        clock: &dyn Clock,
    ) -> DomainResult<DepartmentId> {
        let Some(index) = self
            .department_ids
            .iter()
            .position(|current| *current == department_id)
        else {
            debug!("event=location_delete_department module=location status=error error_code=not_found");
            return Err(DomainError::not_found(
                None,
                format!("Department with id: {department_id} does not exist."),
                None,
            ));
        };

        let removed = self.department_ids.remove(index);
        self.updated_at = Some(clock.now());
        debug!("event=location_delete_department module=location status=ok");
        Ok(removed)
    }

    /// Caller-supplied stable identity.
    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn name(&self) -> &LocationName {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
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

    /// Departments located here, in insertion order. May contain duplicates.
    pub fn department_ids(&self) -> &[DepartmentId] {
        &self.department_ids
    }
}
