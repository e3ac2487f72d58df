//! Opt-in diagnostics over the department tree.
//!
//! Aggregates never call into this module: `Department::set_parent` and
//! `Department::create` accept any parent and depth. Callers that want a
//! stricter policy check it here before mutating.

use crate::error::{DomainError, DomainResult};
use crate::model::department::{Department, DepartmentId};
use std::collections::{HashMap, HashSet};

fn parent_index(departments: &[Department]) -> HashMap<DepartmentId, Option<DepartmentId>> {
    departments
        .iter()
        .map(|department| (department.id(), department.parent_id()))
        .collect()
}

/// Returns whether parenting `node_id` under `candidate_parent_id` would
/// close a loop in the known tree.
///
/// Parents missing from `departments` end the walk.
pub fn would_create_cycle(
    departments: &[Department],
    node_id: DepartmentId,
    candidate_parent_id: DepartmentId,
) -> bool {
    let parents = parent_index(departments);
    let mut visited = HashSet::new();
    let mut cursor = Some(candidate_parent_id);
    while let Some(current) = cursor {
        if current == node_id || !visited.insert(current) {
            return true;
        }
        cursor = parents.get(&current).copied().flatten();
    }
    false
}

/// Counts parent links above `department_id`.
///
/// A parent id outside `departments` is counted and ends the walk.
///
/// # Errors
/// - `NotFound` when `department_id` is not in `departments`.
/// - `Conflict` when the parent chain loops.
pub fn computed_depth(departments: &[Department], department_id: DepartmentId) -> DomainResult<i16> {
    let parents = parent_index(departments);
    depth_in(&parents, department_id)
}

/// Ids of departments whose stored depth differs from the computed one.
///
/// Departments caught in a cycle are reported as mismatched.
pub fn depth_mismatches(departments: &[Department]) -> Vec<DepartmentId> {
    let parents = parent_index(departments);
    departments
        .iter()
        .filter(|department| {
            depth_in(&parents, department.id())
                .map(|depth| depth != department.depth())
                .unwrap_or(true)
        })
        .map(Department::id)
        .collect()
}

fn depth_in(
    parents: &HashMap<DepartmentId, Option<DepartmentId>>,
    department_id: DepartmentId,
) -> DomainResult<i16> {
    let mut cursor = match parents.get(&department_id) {
        Some(parent) => *parent,
        None => {
            return Err(DomainError::not_found(
                None,
                format!("Department with id: {department_id} does not exist."),
                None,
            ))
        }
    };

    let mut visited = HashSet::from([department_id]);
    let mut depth: i16 = 0;
    while let Some(current) = cursor {
        if !visited.insert(current) {
            return Err(DomainError::conflict(
                None,
                format!("Department with id: {department_id} is part of a parent cycle."),
            ));
        }
        depth = depth.saturating_add(1);
        cursor = parents.get(&current).copied().flatten();
    }
    Ok(depth)
}
