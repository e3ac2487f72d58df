//! Position (job title) entity.
//!
//! # Responsibility
//! - Validate position name/description on create and update.
//! - Keep a non-owning index of departments the position is assigned to.
//!
//! # Invariants
//! - `name` is 3-100 chars and not blank.
//! - `description`, when present and not blank, is at most 1000 chars.
//! - A rejected `update` leaves every field untouched.

use crate::clock::Clock;
use crate::error::{DomainError, DomainResult};
use crate::model::department::{Department, DepartmentId};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PositionId = Uuid;

pub const POSITION_NAME_MIN_LEN: usize = 3;
pub const POSITION_NAME_MAX_LEN: usize = 100;
pub const POSITION_DESCRIPTION_MAX_LEN: usize = 1000;

/// Plain persisted shape of a position, used for rehydration.
///
/// Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedPosition {
    pub id: PositionId,
    /// Raw position name.
    pub name: String,
    /// Raw description; `None` when absent.
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Non-owning department references in insertion order.
    pub department_ids: Vec<DepartmentId>,
}

/// Job title that departments can offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    id: PositionId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    department_ids: Vec<DepartmentId>,
}

impl Position {
    /// Creates an active position.
    ///
    /// # Errors
    /// - `Validation` on `Id`, `Name` or `Description`, checked in that order.
    pub fn create(
        id: PositionId,
        name: impl Into<String>,
        description: Option<String>,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            debug!("event=position_create module=position status=error error_code=nil_id");
            return Err(DomainError::validation(
                None,
                "ID cannot be null or empty.",
                Some("Id"),
            ));
        }
        let name = name.into();
        if let Err(err) = validate_fields(&name, description.as_deref()) {
            debug!(
                "event=position_create module=position status=error error_code=invalid_field field={}",
                err.invalid_field().unwrap_or("unknown")
            );
            return Err(err);
        }

        debug!("event=position_create module=position status=ok");
        Ok(Self {
            id,
            name,
            description,
            is_active: true,
            created_at: clock.now(),
            updated_at: None,
            department_ids: Vec::new(),
        })
    }

    /// Rebuilds a position from storage without re-validating it.
    pub fn from_persisted(record: PersistedPosition) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
            department_ids: record.department_ids,
        }
    }

    /// Snapshot of every field, including department references.
    pub fn to_persisted(&self) -> PersistedPosition {
        PersistedPosition {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            department_ids: self.department_ids.clone(),
        }
    }

    /// Re-validates and overwrites name and description.
    ///
    /// # Errors
    /// - `Validation` on `Name` or `Description`; no field is modified.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        clock: &dyn Clock,
    ) -> DomainResult<&Self> {
        let name = name.into();
        if let Err(err) = validate_fields(&name, description.as_deref()) {
            debug!(
                "event=position_update module=position status=error error_code=invalid_field field={}",
                err.invalid_field().unwrap_or("unknown")
            );
            return Err(err);
        }

        self.name = name;
        self.description = description;
        self.updated_at = Some(clock.now());
        debug!("event=position_update module=position status=ok");
        Ok(self)
    }

    /// Switches between active and inactive; stamps `updated_at`.
    pub fn set_active(&mut self, active: bool, clock: &dyn Clock) {
        self.is_active = active;
        self.updated_at = Some(clock.now());
        debug!("event=position_set_active module=position status=ok active={active}");
    }

    /// Records that this position is assigned to `department`.
    ///
    /// Does not stamp `updated_at`.
    pub fn set_department(&mut self, department: &Department) {
        self.department_ids.push(department.id());
        debug!(
            "event=position_set_department module=position status=ok total={}",
            self.department_ids.len()
        );
    }

    /// Drops the first reference to `department_id`.
    ///
    /// Despite the name this removes a department reference, not a position.
    ///
    /// # Errors
    /// - `NotFound` when the department is not referenced.
    pub fn delete_positions(&mut self, department_id: DepartmentId) -> DomainResult<DepartmentId> {
        let Some(index) = self
            .department_ids
            .iter()
            .position(|current| *current == department_id)
        else {
            debug!("event=position_delete_department module=position status=error error_code=not_found");
            return Err(DomainError::not_found(
                None,
                format!("Department with id: {department_id} does not exist."),
                None,
            ));
        };

        let removed = self.department_ids.remove(index);
        debug!("event=position_delete_department module=position status=ok");
        Ok(removed)
    }

    /// Caller-supplied stable identity.
    pub fn id(&self) -> PositionId {
        self.id
    }

    /// Title, 3-100 chars unless rehydrated from older data.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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

    /// Departments this position is assigned to, in insertion order.
    pub fn department_ids(&self) -> &[DepartmentId] {
        &self.department_ids
    }
}

fn validate_fields(name: &str, description: Option<&str>) -> DomainResult<()> {
    let name_len = name.chars().count();
    if name.trim().is_empty()
        || !(POSITION_NAME_MIN_LEN..=POSITION_NAME_MAX_LEN).contains(&name_len)
    {
        return Err(DomainError::validation(
            None,
            format!(
                "Name must be between {POSITION_NAME_MIN_LEN}-{POSITION_NAME_MAX_LEN} characters."
            ),
            Some("Name"),
        ));
    }

    // Blank descriptions are accepted regardless of length.
    if let Some(description) = description {
        if !description.trim().is_empty()
            && description.chars().count() > POSITION_DESCRIPTION_MAX_LEN
        {
            return Err(DomainError::validation(
                None,
                format!(
                    "Description must be at most {POSITION_DESCRIPTION_MAX_LEN} characters."
                ),
                Some("Description"),
            ));
        }
    }

    Ok(())
}
