//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes a 400 `invalid_request` whose details name the
//! offending field, echo the raw value, and carry a machine-readable code.

use std::str::FromStr;

use serde_json::json;
use tracing::debug;

use crate::domain::{Error, Role, ValueValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidId,
    InvalidName,
    InvalidRole,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::InvalidName => "invalid_name",
            Self::InvalidRole => "invalid_role",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(
    field: FieldName,
    message: impl Into<String>,
    code: ValidationCode,
    value: serde_json::Value,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    field_error(
        field,
        format!("{} must be a positive integer", field.as_str()),
        ValidationCode::InvalidId,
        json!(value),
    )
}

/// Parse a path segment into one of the record id types.
pub(crate) fn parse_id<T>(value: &str, field: FieldName) -> Result<T, Error>
where
    T: FromStr<Err = ValueValidationError>,
{
    value.parse().map_err(|_| invalid_id_error(field, value))
}

/// Convert raw ids from a JSON body, dropping values no record can carry.
///
/// Zero, negative and out-of-range ids resolve to no user, so they are
/// skipped like unknown positive ids rather than failing the request.
pub(crate) fn retain_record_ids<T>(values: &[i64], field: FieldName) -> Vec<T>
where
    T: TryFrom<i32, Error = ValueValidationError>,
{
    values
        .iter()
        .filter_map(|&raw| {
            let id = i32::try_from(raw)
                .ok()
                .and_then(|narrow| T::try_from(narrow).ok());
            if id.is_none() {
                debug!(field = field.as_str(), value = raw, "skipping unresolvable id");
            }
            id
        })
        .collect()
}

/// Validate a name through one of the record name constructors.
pub(crate) fn parse_name<T>(
    value: String,
    field: FieldName,
    build: impl FnOnce(String) -> Result<T, ValueValidationError>,
) -> Result<T, Error> {
    build(value.clone()).map_err(|err| {
        field_error(
            field,
            format!("{}: {err}", field.as_str()),
            ValidationCode::InvalidName,
            json!(value),
        )
    })
}

pub(crate) fn parse_role(value: &str, field: FieldName) -> Result<Role, Error> {
    value.parse().map_err(|_| {
        field_error(
            field,
            format!("{} must be one of admin, manager, reader", field.as_str()),
            ValidationCode::InvalidRole,
            json!(value),
        )
    })
}
