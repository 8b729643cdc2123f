//! Shared validation helpers for inbound HTTP adapters.
//!
//! Failures become [`Error::invalid_request`] with a `details` object naming
//! the offending field, a stable code and, where useful, the rejected value.

use serde_json::json;

use crate::domain::{Error, ResultLimit};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    EmptyValue,
    NotFinite,
    OutOfRange,
    InvalidLimit,
    Inconsistent,
    MalformedBody,
    MalformedQuery,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyValue => "empty_value",
            Self::NotFinite => "not_finite",
            Self::OutOfRange => "out_of_range",
            Self::InvalidLimit => "invalid_limit",
            Self::Inconsistent => "inconsistent_value",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
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

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(
    field: FieldName,
    code: ValidationCode,
    message: String,
    value: impl Into<serde_json::Value>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value.into(),
    }))
}

/// Reject blank strings; surrounding whitespace is kept as sent.
pub(crate) fn require_non_blank(value: String, field: FieldName) -> Result<String, Error> {
    if value.trim().is_empty() {
        let name = field.as_str();
        return Err(field_error(
            field,
            ValidationCode::EmptyValue,
            format!("{name} must not be empty"),
        ));
    }
    Ok(value)
}

/// Require a finite number within `min..=max`.
pub(crate) fn require_in_range(
    value: f64,
    field: FieldName,
    min: f64,
    max: f64,
) -> Result<f64, Error> {
    let name = field.as_str();
    if !value.is_finite() {
        return Err(field_error(
            field,
            ValidationCode::NotFinite,
            format!("{name} must be a finite number"),
        ));
    }
    if value < min || value > max {
        return Err(field_value_error(
            field,
            ValidationCode::OutOfRange,
            format!("{name} must be between {min} and {max}"),
            value,
        ));
    }
    Ok(value)
}

/// Require `part <= whole`, reporting the violation against `field`.
pub(crate) fn require_at_most(
    part: u32,
    whole: u32,
    field: FieldName,
    whole_field: FieldName,
) -> Result<u32, Error> {
    if part > whole {
        let (name, whole_name) = (field.as_str(), whole_field.as_str());
        return Err(field_value_error(
            field,
            ValidationCode::Inconsistent,
            format!("{name} must not exceed {whole_name}"),
            part,
        ));
    }
    Ok(part)
}

/// Parse the optional `limit` query parameter.
///
/// Absent means `default`. Anything but a non-negative integer is rejected.
pub(crate) fn parse_limit(raw: Option<&str>, default: ResultLimit) -> Result<ResultLimit, Error> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<usize>()
        .map(ResultLimit::new)
        .map_err(|_| {
            field_value_error(
                FieldName::new("limit"),
                ValidationCode::InvalidLimit,
                "limit must be a non-negative integer".to_owned(),
                raw,
            )
        })
}

/// Error for a request body that could not be decoded.
pub(crate) fn malformed_body_error(reason: impl Into<String>) -> Error {
    Error::invalid_request(reason).with_details(json!({
        "code": ValidationCode::MalformedBody.as_str(),
    }))
}

/// Error for a query string that could not be decoded.
pub(crate) fn malformed_query_error(reason: impl Into<String>) -> Error {
    Error::invalid_request(reason).with_details(json!({
        "code": ValidationCode::MalformedQuery.as_str(),
    }))
}
