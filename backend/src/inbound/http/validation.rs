//! Field validation helpers for the ratings HTTP adapter.
//!
//! Failures become `InvalidRequest` domain errors whose details name the
//! offending field and a stable validation code.

use serde_json::json;

use crate::domain::{CustomerId, Error, MAX_COMMENT_LENGTH, Score, validate_comment};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    ScoreOutOfRange,
    CommentTooLong,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::ScoreOutOfRange => "score_out_of_range",
            ErrorCode::CommentTooLong => "comment_too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
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

pub(crate) const CUSTOMER_ID: FieldName = FieldName::new("customerId");
pub(crate) const SCORE: FieldName = FieldName::new("score");
pub(crate) const COMMENT: FieldName = FieldName::new("comment");

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn require_customer_id(value: Option<i32>) -> Result<CustomerId, Error> {
    value
        .map(CustomerId::new)
        .ok_or_else(|| missing_field_error(CUSTOMER_ID))
}

pub(crate) fn parse_score(value: i32) -> Result<Score, Error> {
    Score::new(value).map_err(|err| field_error(SCORE, ErrorCode::ScoreOutOfRange, err.to_string()))
}

pub(crate) fn require_score(value: Option<i32>) -> Result<Score, Error> {
    value
        .ok_or_else(|| missing_field_error(SCORE))
        .and_then(parse_score)
}

pub(crate) fn check_comment(value: Option<String>) -> Result<Option<String>, Error> {
    let Some(comment) = value else {
        return Ok(None);
    };
    validate_comment(&comment).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": COMMENT.as_str(),
            "code": ErrorCode::CommentTooLong.as_str(),
            "max": MAX_COMMENT_LENGTH,
        }))
    })?;
    Ok(Some(comment))
}
