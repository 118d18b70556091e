//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidUuid.as_str(),
    }))
}

/// Parse a UUID in canonical hyphenated form.
///
/// Simple, braced and URN spellings are rejected so every token has exactly
/// one accepted path segment.
pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    match Uuid::try_parse(&value) {
        Ok(uuid) if value.len() == uuid::fmt::Hyphenated::LENGTH => Ok(uuid),
        _ => Err(invalid_uuid_error(field, &value)),
    }
}

/// Reject a body that is not a JSON object, naming what arrived instead.
pub(crate) fn expected_object_error(value: &serde_json::Value) -> Error {
    let found = match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "object",
    };
    Error::invalid_request(format!(
        "Invalid data. Expected a dictionary, but got {found}."
    ))
    .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    #[rstest]
    #[case("6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f")]
    #[case("6A0D4A34-0D0B-4D8E-9F5B-1A2B3C4D5E6F")]
    fn canonical_uuids_parse(#[case] raw: &str) {
        let parsed = parse_uuid(raw.to_owned(), FieldName::new("uuid")).expect("uuid parses");
        assert!(parsed.to_string().eq_ignore_ascii_case(raw));
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("6a0d4a340d0b4d8e9f5b1a2b3c4d5e6f")]
    #[case("{6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f}")]
    #[case("urn:uuid:6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f")]
    #[case("")]
    fn other_spellings_are_rejected(#[case] raw: &str) {
        let err = parse_uuid(raw.to_owned(), FieldName::new("uuid")).expect_err("rejected");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        let details = err.details().expect("details present");
        assert_eq!(details["field"], "uuid");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[rstest]
    #[case(serde_json::json!([]), "list")]
    #[case(serde_json::json!("x"), "string")]
    #[case(serde_json::Value::Null, "null")]
    fn non_object_bodies_name_their_type(#[case] value: serde_json::Value, #[case] found: &str) {
        let err = expected_object_error(&value);
        assert!(err.message().ends_with(&format!("got {found}.")));
    }
}
