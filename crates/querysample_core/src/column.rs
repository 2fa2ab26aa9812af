//! Column descriptors and the canonical type taxonomy.

use serde::{Deserialize, Serialize};

/// Dialect-independent semantic type of a column.
///
/// Raw engine types such as `varchar(255)` or `bigint` are normalised into one
/// of these before any filter value is validated or quoted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CanonicalColumnType {
    /// Text, temporal and binary values; compared as quoted literals.
    String,
    /// Integer and floating point values; compared unquoted.
    Number,
    /// `true` / `false`.
    Boolean,
    /// Structured values (json, array, map, struct, ...).
    Composite,
    /// Anything the classifier does not recognise.
    Unknown,
}

/// A single table column as reported by the metadata source.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ColumnDescriptor {
    /// Column name, unique within its table
    name: String,
    /// Engine-specific type token, e.g. `varchar(255)`
    #[serde(rename = "type", alias = "raw_type")]
    raw_type: String,
}

impl ColumnDescriptor {
    /// Creates a new column descriptor.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}
