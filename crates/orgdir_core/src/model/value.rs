//! Self-validating value objects.
//!
//! # Responsibility
//! - Wrap primitive strings used by directory entities.
//! - Validate once, at construction; instances are immutable afterwards.
//!
//! # Invariants
//! - Lengths are counted in Unicode scalar values.
//! - Deserialization goes through the same `create` factory as callers do.
//! - `from_persisted` is the only unchecked constructor.

use crate::error::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const IDENTIFIER_MIN_LEN: usize = 3;
pub const IDENTIFIER_MAX_LEN: usize = 150;
pub const DEPARTMENT_NAME_MIN_LEN: usize = 3;
pub const DEPARTMENT_NAME_MAX_LEN: usize = 150;
pub const LOCATION_NAME_MIN_LEN: usize = 3;
pub const LOCATION_NAME_MAX_LEN: usize = 120;

static LATIN_LETTERS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid latin letters regex"));

/// Shared accessors and serde plumbing for string-backed value objects.
macro_rules! string_value_object {
    ($name:ident) => {
        impl $name {
            /// Wraps a stored value without validating it.
            ///
            /// Reserved for rehydration of rows written under earlier rules;
            /// new values go through `create`.
            pub fn from_persisted(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrowed inner value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Owned inner value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::create(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn len_within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Short machine-friendly department code, latin letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_blank(&value) || !len_within(&value, IDENTIFIER_MIN_LEN, IDENTIFIER_MAX_LEN) {
            return Err(DomainError::validation(
                None,
                format!(
                    "Identifier must be between {IDENTIFIER_MIN_LEN}-{IDENTIFIER_MAX_LEN} characters."
                ),
                Some("Identifier"),
            ));
        }
        if !LATIN_LETTERS_RE.is_match(&value) {
            return Err(DomainError::validation(
                None,
                "Identifier must consist of latin characters only.",
                Some("Identifier"),
            ));
        }
        Ok(Self(value))
    }
}

string_value_object!(Identifier);

/// Display name of a department, 3-150 chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentName(String);

impl DepartmentName {
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_blank(&value)
            || !len_within(&value, DEPARTMENT_NAME_MIN_LEN, DEPARTMENT_NAME_MAX_LEN)
        {
            return Err(DomainError::validation(
                None,
                format!(
                    "Name must be between {DEPARTMENT_NAME_MIN_LEN}-{DEPARTMENT_NAME_MAX_LEN} characters."
                ),
                Some("Name"),
            ));
        }
        Ok(Self(value))
    }
}

string_value_object!(DepartmentName);

/// Materialized tree path of a department. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(String);

impl Path {
    /// Accepts any value, including the empty string.
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        Ok(Self(value.into()))
    }
}

string_value_object!(Path);

/// Display name of a location, 3-120 chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName(String);

impl LocationName {
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_blank(&value) || !len_within(&value, LOCATION_NAME_MIN_LEN, LOCATION_NAME_MAX_LEN) {
            return Err(DomainError::validation(
                None,
                format!(
                    "Name must be between {LOCATION_NAME_MIN_LEN}-{LOCATION_NAME_MAX_LEN} characters."
                ),
                Some("Name"),
            ));
        }
        Ok(Self(value))
    }
}

string_value_object!(LocationName);

/// Free-form postal address. Must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if is_blank(&value) {
            return Err(DomainError::validation(
                None,
                "Address cannot be blank.",
                Some("Address"),
            ));
        }
        Ok(Self(value))
    }
}

string_value_object!(Address);

/// Time zone label (e.g. `Europe/Berlin`). Not checked against any database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeZone(String);

impl TimeZone {
    pub fn create(value: impl Into<String>) -> DomainResult<Self> {
        Ok(Self(value.into()))
    }
}

string_value_object!(TimeZone);

#[cfg(test)]
mod tests {
    use super::{Address, DepartmentName, Identifier, LocationName, Path, TimeZone};
    use crate::error::ErrorKind;

    #[test]
    fn identifier_accepts_latin_letters_within_bounds() {
        let identifier = Identifier::create("Finance").unwrap();
        assert_eq!(identifier.as_str(), "Finance");
        assert!(Identifier::create("abc").is_ok());
        assert!(Identifier::create("a".repeat(150)).is_ok());
    }

    #[test]
    fn identifier_reports_length_before_charset() {
        let err = Identifier::create("a1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("between 3-150"));

        let err = Identifier::create("abc1").unwrap_err();
        assert_eq!(err.invalid_field(), Some("Identifier"));
        assert!(err.message().contains("latin"));
    }

    #[test]
    fn identifier_rejects_non_ascii_letters() {
        assert!(Identifier::create("Отдел").is_err());
        assert!(Identifier::create("café").is_err());
        assert!(Identifier::create("two words").is_err());
    }

    #[test]
    fn department_name_counts_chars_not_bytes() {
        assert!(DepartmentName::create("Øst").is_ok());
        assert!(DepartmentName::create("é".repeat(150)).is_ok());
        assert!(DepartmentName::create("é".repeat(151)).is_err());
    }

    #[test]
    fn department_name_rejects_blank() {
        let err = DepartmentName::create("     ").unwrap_err();
        assert_eq!(err.invalid_field(), Some("Name"));
    }

    #[test]
    fn location_name_has_tighter_upper_bound() {
        assert!(LocationName::create("x".repeat(120)).is_ok());
        assert!(LocationName::create("x".repeat(121)).is_err());
        assert!(DepartmentName::create("x".repeat(121)).is_ok());
    }

    #[test]
    fn address_only_rejects_blank() {
        assert!(Address::create("1").is_ok());
        assert!(Address::create("x".repeat(5000)).is_ok());
        let err = Address::create("\t\n").unwrap_err();
        assert_eq!(err.invalid_field(), Some("Address"));
    }

    #[test]
    fn opaque_values_accept_anything() {
        assert_eq!(Path::create("").unwrap().as_str(), "");
        assert_eq!(Path::create("root.finance").unwrap().as_str(), "root.finance");
        assert_eq!(TimeZone::create("not/a zone").unwrap().as_str(), "not/a zone");
    }

    #[test]
    fn from_persisted_skips_validation() {
        let identifier = Identifier::from_persisted("eng-1");
        assert_eq!(identifier.as_str(), "eng-1");
        assert_eq!(Address::from_persisted("").as_str(), "");
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Identifier = serde_json::from_str("\"Sales\"").unwrap();
        assert_eq!(ok.as_str(), "Sales");

        let err = serde_json::from_str::<Identifier>("\"Sales2\"").unwrap_err();
        assert!(err.to_string().contains("latin"), "unexpected error: {err}");

        assert_eq!(serde_json::to_value(&ok).unwrap(), "Sales");
    }
}
