use chrono::{Duration, TimeZone as _, Utc};
use orgdir_core::{
    Address, Department, DepartmentName, ErrorKind, Identifier, Location, LocationName,
    ManualClock, Path, PersistedLocation, TimeZone,
};
use uuid::Uuid;

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2026, 5, 4, 8, 30, 0).unwrap())
}

fn location(clock: &ManualClock) -> Location {
    Location::create(
        Uuid::new_v4(),
        LocationName::create("Berlin Office").unwrap(),
        Address::create("Friedrichstrasse 1, Berlin").unwrap(),
        TimeZone::create("Europe/Berlin").unwrap(),
        clock,
    )
    .unwrap()
}

fn department(clock: &ManualClock) -> Department {
    Department::create(
        Uuid::new_v4(),
        None,
        DepartmentName::create("Sales").unwrap(),
        Identifier::create("sales").unwrap(),
        Path::create("sales").unwrap(),
        0,
        [],
        [],
        clock,
    )
    .unwrap()
}

#[test]
fn create_sets_defaults() {
    let clock = clock();
    let location = location(&clock);

    assert!(location.is_active());
    assert_eq!(location.updated_at(), None);
    assert_eq!(location.time_zone().as_str(), "Europe/Berlin");
    assert!(location.department_ids().is_empty());
}

#[test]
fn create_rejects_nil_id() {
    let clock = clock();
    let err = Location::create(
        Uuid::nil(),
        LocationName::create("Berlin Office").unwrap(),
        Address::create("Somewhere").unwrap(),
        TimeZone::create("UTC").unwrap(),
        &clock,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.invalid_field(), Some("Id"));
}

#[test]
fn update_roundtrips_values_and_stamps_after_creation() {
    let clock = clock();
    let mut location = location(&clock);
    clock.advance(Duration::seconds(30));

    let name = LocationName::create("Munich Office").unwrap();
    let address = Address::create("Marienplatz 8, Munich").unwrap();
    let time_zone = TimeZone::create("Europe/Berlin").unwrap();
    location
        .update(name.clone(), address.clone(), time_zone.clone(), &clock)
        .unwrap();

    assert_eq!(location.name(), &name);
    assert_eq!(location.address(), &address);
    assert_eq!(location.time_zone(), &time_zone);
    let updated_at = location.updated_at().unwrap();
    assert!(updated_at >= location.created_at());
}

#[test]
fn set_departments_appends_reference_and_stamps() {
    let clock = clock();
    let mut location = location(&clock);
    let department = department(&clock);

    clock.advance(Duration::minutes(2));
    location.set_departments(&department, &clock);

    assert_eq!(location.department_ids(), &[department.id()]);
    assert_eq!(
        location.updated_at(),
        Some(location.created_at() + Duration::minutes(2))
    );
    assert!(department.locations().is_empty());
}

#[test]
fn delete_departments_stamps_only_on_success() {
    let clock = clock();
    let mut location = location(&clock);
    let department = department(&clock);

    let err = location.delete_departments(department.id(), &clock).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(location.updated_at(), None);

    location.set_departments(&department, &clock);
    location.set_departments(&department, &clock);
    clock.advance(Duration::minutes(5));

    assert_eq!(
        location.delete_departments(department.id(), &clock).unwrap(),
        department.id()
    );
    assert_eq!(location.department_ids(), &[department.id()]);
    assert_eq!(
        location.updated_at(),
        Some(location.created_at() + Duration::minutes(5))
    );
}

#[test]
fn set_active_toggles_state() {
    let clock = clock();
    let mut location = location(&clock);

    location.set_active(false, &clock);
    assert!(!location.is_active());
    location.set_active(true, &clock);
    assert!(location.is_active());
    assert!(location.updated_at().is_some());
}

#[test]
fn persisted_roundtrip_preserves_state() {
    let clock = clock();
    let mut location = location(&clock);
    location.set_departments(&department(&clock), &clock);

    let rehydrated = Location::from_persisted(location.to_persisted());
    assert_eq!(rehydrated, location);
}

#[test]
fn persisted_record_with_outdated_values_still_loads() {
    let clock = clock();
    let mut record = location(&clock).to_persisted();
    record.name = "HQ".to_string();
    record.address = "   ".to_string();

    let json = serde_json::to_value(&record).unwrap();
    let decoded: PersistedLocation = serde_json::from_value(json).unwrap();
    let rehydrated = Location::from_persisted(decoded);

    assert_eq!(rehydrated.name().as_str(), "HQ");
    assert_eq!(rehydrated.address().as_str(), "   ");
}
