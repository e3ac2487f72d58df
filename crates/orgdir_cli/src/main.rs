//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `orgdir_core` linkage, configuration and logging wiring.
//! - Build a tiny sample directory and print a deterministic summary.

use log::info;
use orgdir_core::{
    Address, Department, DepartmentName, DomainResult, Identifier, Location, LocationName, Path,
    Position, SystemClock, TimeZone,
};
use std::process::ExitCode;
use uuid::Uuid;

fn main() -> ExitCode {
    let config = orgdir_core::CoreConfig::from_env();
    if let Err(err) = config.init_logging() {
        eprintln!("orgdir logging disabled: {err}");
    }

    println!("orgdir_core version={}", orgdir_core::core_version());
    match build_sample() {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("orgdir sample failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_sample() -> DomainResult<String> {
    let clock = SystemClock;

    let mut office = Location::create(
        Uuid::new_v4(),
        LocationName::create("Head Office")?,
        Address::create("1 Main Street")?,
        TimeZone::create("UTC")?,
        &clock,
    )?;
    let mut engineer = Position::create(Uuid::new_v4(), "Software Engineer", None, &clock)?;
    let department = Department::create(
        Uuid::new_v4(),
        None,
        DepartmentName::create("Engineering")?,
        Identifier::create("eng")?,
        Path::create("eng")?,
        0,
        [office.id()],
        [engineer.id()],
        &clock,
    )?;
    office.set_departments(&department, &clock);
    engineer.set_department(&department);

    info!(
        "event=cli_sample module=cli status=ok locations={} positions={}",
        department.locations().len(),
        department.positions().len()
    );

    Ok(format!(
        "department={} identifier={} locations={} positions={} office_departments={} position_departments={}",
        department.name(),
        department.identifier(),
        department.locations().len(),
        department.positions().len(),
        office.department_ids().len(),
        engineer.department_ids().len()
    ))
}
