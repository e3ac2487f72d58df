use orgdir_core::{Address, DepartmentName, ErrorKind, Identifier, LocationName, Path, TimeZone};
use proptest::prelude::*;

proptest! {
    #[test]
    fn identifier_accepts_latin_letters_and_roundtrips(value in "[A-Za-z]{3,150}") {
        let identifier = Identifier::create(value.clone()).unwrap();
        prop_assert_eq!(identifier.as_str(), value.as_str());
    }

    #[test]
    fn identifier_rejects_any_non_letter(
        prefix in "[A-Za-z]{1,20}",
        bad in "[0-9 _\\-!@#.]",
        suffix in "[A-Za-z]{1,20}",
    ) {
        let err = Identifier::create(format!("{prefix}{bad}{suffix}")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(err.invalid_field(), Some("Identifier"));
    }

    #[test]
    fn identifier_rejects_out_of_range_length(value in "[A-Za-z]{0,2}|[A-Za-z]{151,200}") {
        let err = Identifier::create(value).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn create_is_deterministic(value in ".{0,40}") {
        prop_assert_eq!(
            DepartmentName::create(value.clone()).is_ok(),
            DepartmentName::create(value.clone()).is_ok()
        );
        let path = Path::create(value.clone()).unwrap();
        prop_assert_eq!(path.as_str(), value.as_str());
        prop_assert_eq!(TimeZone::create(value.clone()).unwrap().into_inner(), value);
    }
}

#[test]
fn value_objects_display_their_inner_value() {
    let name = LocationName::create("Head Office").unwrap();
    assert_eq!(name.to_string(), "Head Office");
    assert_eq!(String::from(Address::create("Main St 1").unwrap()), "Main St 1");
}

#[test]
fn blank_names_report_name_field() {
    for raw in ["", "   ", "\t\t\t"] {
        let err = DepartmentName::create(raw).unwrap_err();
        assert_eq!(err.invalid_field(), Some("Name"));
        let err = LocationName::create(raw).unwrap_err();
        assert_eq!(err.invalid_field(), Some("Name"));
    }
}
