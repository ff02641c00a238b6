//! # Core Domain Entities
//!
//! ## Types
//!
//! - **Number**: a finite numeric value submitted by a client
//! - **Submission**: one stored record of a raw numbers array plus timestamp
//! - **Timestamp**: milliseconds since the Unix epoch

use ordered_float::OrderedFloat;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Sequential identifier assigned by the store, starting at 1.
pub type SubmissionId = u64;

/// Largest integer magnitude an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A finite numeric value.
///
/// Equality, ordering and hashing are by numeric value, so `Number` can key
/// a map directly. `-0.0` and `0.0` are the same number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number(OrderedFloat<f64>);

impl Number {
    /// Creates a number, rejecting NaN and infinities.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() {
            // Normalize negative zero so the bit pattern matches `0.0`.
            Some(Self(OrderedFloat(value + 0.0)))
        } else {
            None
        }
    }

    /// Returns the underlying floating point value.
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }

    /// Returns the value as an integer when it has no fractional part and
    /// fits exactly.
    pub fn as_integer(self) -> Option<i64> {
        let v = self.value();
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INTEGER {
            Some(v as i64)
        } else {
            None
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(OrderedFloat(f64::from(value)))
    }
}

impl TryFrom<f64> for Number {
    type Error = NonFiniteNumber;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NonFiniteNumber(value))
    }
}

/// Returned when converting NaN or an infinity into a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{0} is not a finite number")]
pub struct NonFiniteNumber(pub f64);

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_integer() {
            Some(i) => write!(f, "{}", i),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Integral values go out as JSON integers so `[5]` round-trips as `[5]`.
        match self.as_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.value()),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Number::new(value).ok_or_else(|| de::Error::custom(NonFiniteNumber(value)))
    }
}

/// One stored record of a raw numbers array.
///
/// Immutable once created. The `numbers` are always the unfiltered input as
/// submitted, and always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Sequential id assigned by the store.
    pub id: SubmissionId,
    /// The raw submitted numbers.
    pub numbers: Vec<Number>,
    /// When the store accepted the submission.
    pub submitted_at: Timestamp,
}

impl Submission {
    /// Returns true if the submission was made strictly after `threshold`.
    pub fn is_after(&self, threshold: Timestamp) -> bool {
        self.submitted_at > threshold
    }
}

/// Convenience for building number vectors in tests and fixtures.
pub fn numbers(values: &[i32]) -> Vec<Number> {
    values.iter().copied().map(Number::from).collect()
}
