//! Field-level validation errors for query-string parameters.
//!
//! Parameters arrive as raw strings. [`ParamErrors`] collects failures from
//! two stages: strict integer parsing (done by hand, since a value that does
//! not parse has nothing to validate) and the declarative rules expressed
//! with `validator` on the typed parameter structs in [`crate::params`].
//! At most one error is reported per parameter, in declaration order.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// One failing query parameter.
///
/// Serialized as `{"type": "field", "value", "msg", "path", "location": "query"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The raw value as received, `None` when the parameter was absent.
    pub value: Option<String>,
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn query(path: &str, value: Option<&str>, msg: impl Into<String>) -> Self {
        Self {
            kind: "field",
            value: value.map(str::to_owned),
            msg: msg.into(),
            path: path.to_owned(),
            location: "query",
        }
    }
}

/// Accumulates [`FieldError`]s while a raw query is turned into typed params.
#[derive(Debug, Default)]
pub struct ParamErrors {
    errors: Vec<FieldError>,
}

impl ParamErrors {
    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn has(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// Parse an optional integer parameter.
    ///
    /// Absent parameters yield `None`. A present value must be a base-10
    /// integer after trimming; otherwise `msg` is recorded and `None` is
    /// returned so the caller can fall back to a default.
    pub fn int(&mut self, path: &str, raw: Option<&str>, msg: &str) -> Option<i64> {
        let raw = raw?;
        match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.errors.push(FieldError::query(path, Some(raw), msg));
                None
            }
        }
    }

    /// Run the `validator` rules of `params` and record the first failure of
    /// each field not already reported.
    ///
    /// `fields` lists every parameter in declaration order together with its
    /// raw value, which is echoed back in the error.
    pub fn check<T: Validate>(&mut self, params: &T, fields: &[(&str, Option<&str>)]) {
        let Err(report) = params.validate() else {
            return;
        };
        for (path, raw) in fields {
            if self.has(path) {
                continue;
            }
            if let Some(msg) = first_message(&report, path) {
                self.errors.push(FieldError::query(path, *raw, msg));
            }
        }
    }

    /// Return `value` if nothing failed, otherwise the collected errors in
    /// declaration order.
    pub fn finish<T>(mut self, value: T, order: &[&str]) -> Result<T, CoreError> {
        if self.errors.is_empty() {
            return Ok(value);
        }
        self.errors
            .sort_by_key(|e| order.iter().position(|p| *p == e.path).unwrap_or(usize::MAX));
        Err(CoreError::InvalidParams(self.errors))
    }
}

fn first_message(report: &ValidationErrors, path: &str) -> Option<String> {
    let field_errors = report.field_errors();
    let first = field_errors.get(path)?.first()?;
    Some(
        first
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Invalid value".to_string()),
    )
}
