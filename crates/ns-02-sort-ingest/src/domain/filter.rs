//! # Comparison Filter
//!
//! A filter keeps the elements that satisfy `element <op> value`. Comparison
//! is numeric; `=` is exact numeric equality.

use super::errors::SortIngestError;
use serde::{Deserialize, Serialize};
use shared_types::Number;
use std::fmt;
use std::str::FromStr;

/// Comparison operator accepted in `filterType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    /// `<`: keep elements strictly less than the value.
    #[serde(rename = "<")]
    LessThan,
    /// `>`: keep elements strictly greater than the value.
    #[serde(rename = ">")]
    GreaterThan,
    /// `=`: keep elements numerically equal to the value.
    #[serde(rename = "=")]
    Equal,
}

impl FilterOperator {
    /// All operators, in the order they are listed to clients.
    pub const ALL: [FilterOperator; 3] = [Self::LessThan, Self::GreaterThan, Self::Equal];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "=",
        }
    }

    /// Returns true if `element <op> value` holds.
    pub fn matches(self, element: Number, value: Number) -> bool {
        match self {
            Self::LessThan => element < value,
            Self::GreaterThan => element > value,
            Self::Equal => element == value,
        }
    }
}

impl FromStr for FilterOperator {
    type Err = SortIngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| SortIngestError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A validated filter: an operator and the value it compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub operator: FilterOperator,
    pub value: Number,
}

impl FilterSpec {
    pub fn new(operator: FilterOperator, value: Number) -> Self {
        Self { operator, value }
    }

    /// Builds a filter from optional request parts.
    ///
    /// - no operator: no filter, any value is ignored
    /// - unrecognized operator: `UnknownOperator`
    /// - operator without value: `MissingFilterValue`
    pub fn from_parts(
        operator: Option<&str>,
        value: Option<Number>,
    ) -> Result<Option<Self>, SortIngestError> {
        let Some(raw) = operator else {
            return Ok(None);
        };
        let operator = raw.parse::<FilterOperator>()?;
        let value = value.ok_or_else(|| SortIngestError::MissingFilterValue {
            operator: raw.to_string(),
        })?;
        Ok(Some(Self::new(operator, value)))
    }

    /// Returns the elements that pass the filter, in their original order.
    pub fn apply(&self, numbers: &[Number]) -> Vec<Number> {
        numbers
            .iter()
            .copied()
            .filter(|&n| self.operator.matches(n, self.value))
            .collect()
    }
}

/// Filter as it arrives from a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilter {
    #[serde(rename = "filterType")]
    pub operator: Option<String>,
    #[serde(rename = "filterValue")]
    pub value: Option<Number>,
}

impl RawFilter {
    /// No filtering.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(operator: impl Into<String>, value: Option<Number>) -> Self {
        Self {
            operator: Some(operator.into()),
            value,
        }
    }

    pub fn validate(&self) -> Result<Option<FilterSpec>, SortIngestError> {
        FilterSpec::from_parts(self.operator.as_deref(), self.value)
    }
}

impl From<FilterSpec> for RawFilter {
    fn from(spec: FilterSpec) -> Self {
        Self::new(spec.operator.symbol(), Some(spec.value))
    }
}
