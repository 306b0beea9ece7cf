//! Parsing of raw, textual generation parameters.
//!
//! HTTP callers pass `count`, `debug` and `prefix` as query strings. This module
//! turns them into typed values and applies the range rules, so the service
//! only ever sees validated input.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest number of identifiers a single call may request.
pub const MAX_COUNT: usize = 255;

/// Count used when the caller does not supply one.
pub const DEFAULT_COUNT: i64 = 1;

/// Raw generation parameters, exactly as received from the caller.
///
/// Every field is optional and an empty string is treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl GenerateParams {
    /// Builds parameters requesting `count` identifiers.
    pub fn with_count(count: impl ToString) -> Self {
        Self {
            count: Some(count.to_string()),
            ..Self::default()
        }
    }

    /// Parses the `count` field into an integer, defaulting to 1.
    ///
    /// The range is not checked here; see [`validate_count`].
    pub fn parse_count(&self) -> Result<Option<i64>> {
        match non_empty(&self.count) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| Error::invalid_argument(format!("count is not a valid integer: {raw}"))),
        }
    }

    /// Parses the `debug` field, defaulting to `false`.
    pub fn parse_debug(&self) -> Result<bool> {
        match non_empty(&self.debug) {
            None => Ok(false),
            Some(raw) => parse_bool(raw)
                .ok_or_else(|| Error::invalid_argument(format!("debug is not a valid boolean: {raw}"))),
        }
    }

    /// Returns the prefix, or `""` when none was given.
    pub fn prefix(&self) -> &str {
        non_empty(&self.prefix).unwrap_or_default()
    }
}

/// Applies the default and the `0..=MAX_COUNT` range to a requested count.
///
/// Zero is accepted; it yields an empty result but still counts as a request.
pub fn validate_count(requested: Option<i64>) -> Result<usize> {
    let count = requested.unwrap_or(DEFAULT_COUNT);
    match usize::try_from(count) {
        Ok(n) if n <= MAX_COUNT => Ok(n),
        _ => Err(Error::OutOfRange { count }),
    }
}

/// Parses the usual textual boolean spellings.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts
/// `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
