//! Shared error contract for directory operations.
//!
//! # Responsibility
//! - Define the error-kind taxonomy surfaced to API/persistence callers.
//! - Carry a human-readable message and the offending field when known.
//!
//! # Invariants
//! - `ErrorKind::None` is a default sentinel and is never attached to a
//!   constructed or deserialized `DomainError`.
//! - Every fallible operation in this crate returns `DomainResult<T>`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DomainResult<T> = Result<T, DomainError>;

/// Error category used by callers to map onto transport-level codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No error. Default value only.
    #[default]
    None,
    /// Input failed a field-level rule.
    Validation,
    /// Referenced entity or association is absent.
    NotFound,
    /// Reserved for unexpected failures in outer layers.
    Failure,
    /// Reserved for state conflicts in outer layers.
    Conflict,
}

impl ErrorKind {
    /// Stable wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Validation => "VALIDATION",
            Self::NotFound => "NOT_FOUND",
            Self::Failure => "FAILURE",
            Self::Conflict => "CONFLICT",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed domain error returned by factories and mutation methods.
///
/// Deserialization rejects `ErrorKind::None`, so a decoded error keeps the
/// same invariant as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DomainErrorRecord")]
pub struct DomainError {
    kind: ErrorKind,
    code: Option<String>,
    message: String,
    invalid_field: Option<String>,
}

/// Wire shape of `DomainError` before the kind is checked.
#[derive(Deserialize)]
struct DomainErrorRecord {
    kind: ErrorKind,
    code: Option<String>,
    message: String,
    invalid_field: Option<String>,
}

impl TryFrom<DomainErrorRecord> for DomainError {
    type Error = String;

    fn try_from(record: DomainErrorRecord) -> Result<Self, Self::Error> {
        if record.kind == ErrorKind::None {
            return Err("error kind `NONE` cannot be attached to an error".to_string());
        }
        Ok(Self {
            kind: record.kind,
            code: record.code,
            message: record.message,
            invalid_field: record.invalid_field,
        })
    }
}

impl DomainError {
    fn new(
        kind: ErrorKind,
        code: Option<&str>,
        message: impl Into<String>,
        invalid_field: Option<&str>,
    ) -> Self {
        Self {
            kind,
            code: code.map(str::to_owned),
            message: message.into(),
            invalid_field: invalid_field.map(str::to_owned),
        }
    }

    /// Field-level rule violation. `field` names the offending input.
    pub fn validation(code: Option<&str>, message: impl Into<String>, field: Option<&str>) -> Self {
        Self::new(ErrorKind::Validation, code, message, field)
    }

    /// Referenced entity or association is absent.
    pub fn not_found(code: Option<&str>, message: impl Into<String>, field: Option<&str>) -> Self {
        Self::new(ErrorKind::NotFound, code, message, field)
    }

    /// Unexpected failure. Not produced by the domain model itself.
    pub fn failure(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, message, None)
    }

    /// State conflict. Not produced by the domain model itself.
    pub fn conflict(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, code, message, None)
    }

    /// Category of this error; never `ErrorKind::None`.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Optional machine-readable code supplied by the caller.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the input field that failed validation, if any.
    pub fn invalid_field(&self) -> Option<&str> {
        self.invalid_field.as_deref()
    }

    /// Shorthand for `kind() == ErrorKind::Validation`.
    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    /// Shorthand for `kind() == ErrorKind::NotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.invalid_field {
            Some(field) => write!(f, "{} [{}]: {}", self.kind, field, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl Error for DomainError {}
