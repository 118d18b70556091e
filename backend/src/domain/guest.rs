//! Guest entity and the validation rules for guest payloads.
//!
//! Validation is a pure function over [`RawField`] values so inbound adapters
//! decide how to read their wire format while the rules (and their messages)
//! live here.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::Error;

/// Maximum length of a guest name, in Unicode scalar values.
pub const MAX_NAME_CHARS: usize = 255;

/// Store-assigned guest identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(i64);

impl GuestId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error raised when a name exceeds [`MAX_NAME_CHARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("name has {actual} characters, the limit is {max}", max = MAX_NAME_CHARS)]
pub struct GuestNameError {
    actual: usize,
}

/// A first or last name.
///
/// Empty strings are allowed and whitespace is kept verbatim.
///
/// # Examples
/// ```
/// use wedding_backend::domain::GuestName;
///
/// assert!(GuestName::new("Ada").is_ok());
/// assert!(GuestName::new("x".repeat(256)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GuestName(String);

impl GuestName {
    /// Validate and wrap a name.
    pub fn new(value: impl Into<String>) -> Result<Self, GuestNameError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > MAX_NAME_CHARS {
            return Err(GuestNameError { actual });
        }
        Ok(Self(value))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GuestName {
    type Error = GuestNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GuestName> for String {
    fn from(value: GuestName) -> Self {
        value.0
    }
}

/// A stored guest.
///
/// Serialises as `{"id", "first_name", "last_name"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    /// Store-assigned identifier.
    pub id: GuestId,
    /// Given name.
    pub first_name: GuestName,
    /// Family name.
    pub last_name: GuestName,
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name.as_str(), self.last_name.as_str())
    }
}

/// Writable guest fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    /// `first_name`
    FirstName,
    /// `last_name`
    LastName,
}

impl GuestField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
        }
    }
}

/// A payload field as read off the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
    /// The key was absent.
    Missing,
    /// The key was present with a null value.
    Null,
    /// The value was (or was coerced to) text.
    Text(String),
    /// The value had a type that cannot become text.
    Invalid,
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldProblem {
    /// Field absent on a full write.
    #[error("This field is required.")]
    Required,
    /// Field explicitly null.
    #[error("This field may not be null.")]
    Null,
    /// Field not a string.
    #[error("Not a valid string.")]
    NotAString,
    /// Field longer than [`MAX_NAME_CHARS`].
    #[error("Ensure this field has no more than {max} characters.", max = MAX_NAME_CHARS)]
    TooLong,
}

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: GuestField,
    /// Reason for rejection.
    pub problem: FieldProblem,
}

/// Field errors in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: GuestField, problem: FieldProblem) {
        self.0.push(FieldError { field, problem });
    }

    /// Whether no field was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the rejected fields.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        let mut by_field = Map::new();
        for FieldError { field, problem } in errors.0 {
            let messages = by_field
                .entry(field.as_str())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = messages {
                list.push(Value::String(problem.to_string()));
            }
        }
        Error::invalid_request("guest payload failed validation")
            .with_details(json!({ "fieldErrors": by_field }))
    }
}

fn check_name(field: GuestField, raw: RawField, errors: &mut FieldErrors) -> Option<GuestName> {
    let problem = match raw {
        RawField::Text(text) => match GuestName::new(text) {
            Ok(name) => return Some(name),
            Err(_) => FieldProblem::TooLong,
        },
        RawField::Missing => FieldProblem::Required,
        RawField::Null => FieldProblem::Null,
        RawField::Invalid => FieldProblem::NotAString,
    };
    errors.push(field, problem);
    None
}

fn check_optional_name(
    field: GuestField,
    raw: RawField,
    errors: &mut FieldErrors,
) -> Option<GuestName> {
    match raw {
        RawField::Missing => None,
        present => check_name(field, present, errors),
    }
}

/// A complete set of writable fields, used by create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestDraft {
    /// Given name.
    pub first_name: GuestName,
    /// Family name.
    pub last_name: GuestName,
}

impl GuestDraft {
    /// Validate both fields; every rejected field is reported.
    ///
    /// # Examples
    /// ```
    /// use wedding_backend::domain::{GuestDraft, RawField};
    ///
    /// let draft = GuestDraft::validate(RawField::Text("Ada".into()), RawField::Missing);
    /// assert!(draft.is_err());
    /// ```
    pub fn validate(first_name: RawField, last_name: RawField) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let first = check_name(GuestField::FirstName, first_name, &mut errors);
        let last = check_name(GuestField::LastName, last_name, &mut errors);
        match (first, last) {
            (Some(first_name), Some(last_name)) => errors.into_result(Self {
                first_name,
                last_name,
            }),
            _ => Err(errors),
        }
    }
}

/// A partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    /// New given name, if supplied.
    pub first_name: Option<GuestName>,
    /// New family name, if supplied.
    pub last_name: Option<GuestName>,
}

impl GuestPatch {
    /// Validate the fields that are present.
    pub fn validate(first_name: RawField, last_name: RawField) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let first_name = check_optional_name(GuestField::FirstName, first_name, &mut errors);
        let last_name = check_optional_name(GuestField::LastName, last_name, &mut errors);
        errors.into_result(Self {
            first_name,
            last_name,
        })
    }

    /// Whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Apply the patch to `guest`, returning the updated record.
    #[must_use]
    pub fn apply(&self, guest: &Guest) -> Guest {
        Guest {
            id: guest.id,
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| guest.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| guest.last_name.clone()),
        }
    }
}
