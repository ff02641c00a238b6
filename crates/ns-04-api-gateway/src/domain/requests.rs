//! Request and response bodies for the HTTP routes.
//!
//! Bodies are validated from raw JSON rather than deserialized straight into
//! typed structs so that every invalid field can be reported by name.

use super::error::{messages, ApiError, FieldError};
use ns_02_sort_ingest::{FilterOperator, RawFilter};
use ns_03_frequency_report::FrequencyEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::Number;

/// A validated submit-and-sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub numbers: Vec<Number>,
    pub filter: RawFilter,
}

impl SortRequest {
    /// Validates a JSON body.
    ///
    /// Field checks run independently and all failures are returned
    /// together. The `filterType`-without-`filterValue` rule is left to the
    /// sort service, which reports it as its own error.
    pub fn from_json(body: &Value) -> Result<Self, ApiError> {
        let mut errors = Vec::new();

        let numbers = match parse_numbers(body.get("numbers")) {
            Ok(numbers) => numbers,
            Err(message) => {
                errors.push(FieldError::body("numbers", message));
                Vec::new()
            }
        };

        let operator = match parse_filter_type(body.get("filterType")) {
            Ok(operator) => operator,
            Err(message) => {
                errors.push(FieldError::body("filterType", message));
                None
            }
        };

        let value = match parse_filter_value(body.get("filterValue")) {
            Ok(value) => value,
            Err(message) => {
                errors.push(FieldError::body("filterValue", message));
                None
            }
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(Self {
            numbers,
            filter: RawFilter { operator, value },
        })
    }
}

fn parse_numbers(value: Option<&Value>) -> Result<Vec<Number>, &'static str> {
    let items = match value {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(messages::NUMBERS_NOT_ARRAY),
    };

    items
        .iter()
        .map(|item| {
            item.as_f64()
                .and_then(Number::new)
                .ok_or(messages::NUMBERS_NOT_NUMERIC)
        })
        .collect()
}

fn parse_filter_type(value: Option<&Value>) -> Result<Option<String>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.parse::<FilterOperator>().is_ok() => Ok(Some(s.clone())),
        Some(_) => Err(messages::FILTER_TYPE_INVALID),
    }
}

/// Accepts a JSON number or a numeric string such as `"2"` or `"-1.5"`.
fn parse_filter_value(value: Option<&Value>) -> Result<Option<Number>, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .and_then(Number::new)
            .map(Some)
            .ok_or(messages::FILTER_VALUE_INVALID),
        Some(Value::String(s)) if is_numeric_literal(s) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::new)
            .map(Some)
            .ok_or(messages::FILTER_VALUE_INVALID),
        Some(_) => Err(messages::FILTER_VALUE_INVALID),
    }
}

/// Optional sign, optional integer digits, then an optional `.` that must be
/// followed by at least one digit: `2`, `-1.5`, `.5`, but not `5.`.
fn is_numeric_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !unsigned.is_empty() && all_digits(unsigned),
    }
}

/// Submit-and-sort success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResponse {
    pub sorted_numbers: Vec<Number>,
}

/// One entry of the top-frequency response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyResponseEntry {
    pub number: Number,
    pub frequency: u64,
}

impl From<FrequencyEntry> for FrequencyResponseEntry {
    fn from(entry: FrequencyEntry) -> Self {
        Self {
            number: entry.number,
            frequency: entry.count,
        }
    }
}
