//! Single-predicate filter supplied by the caller.

use serde::{Deserialize, Serialize};

/// Comparison operators accepted in a sample query filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum FilterOperator {
    /// `=`
    #[strum(serialize = "=")]
    Eq,
    /// `!=`
    #[strum(serialize = "!=")]
    NotEq,
    /// `LIKE`
    #[strum(serialize = "LIKE")]
    Like,
    /// `IS NULL`
    #[strum(serialize = "IS NULL")]
    IsNull,
    /// `IS NOT NULL`
    #[strum(serialize = "IS NOT NULL")]
    IsNotNull,
}

impl FilterOperator {
    /// Whether this operator compares against a value.
    ///
    /// Null checks take no operand, so their value is ignored.
    pub fn takes_value(self) -> bool {
        matches!(
            self,
            FilterOperator::Eq | FilterOperator::NotEq | FilterOperator::Like
        )
    }
}

/// A `column operator value` filter.
///
/// The operator is kept as the caller sent it and only parsed into a
/// [`FilterOperator`] during query construction, so an unsupported operator is
/// reported as a validation error rather than a deserialization failure.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct FilterSpec {
    /// Column to filter on
    column_name: String,
    /// Operator, one of `=`, `!=`, `LIKE`, `IS NULL`, `IS NOT NULL`
    operator: String,
    /// Raw comparison value; ignored for null checks
    #[serde(default)]
    value: String,
}

impl FilterSpec {
    /// Creates a new filter.
    pub fn new(
        column_name: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}
