//! Table metadata as loaded from the metastore.

use crate::ColumnDescriptor;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A table's columns and observed partitions.
///
/// `known_partition_values` is ordered oldest to newest, so the last entry is
/// the latest partition.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct TableMetadata {
    /// Schema (database) the table lives in
    schema_name: String,
    /// Table name
    table_name: String,
    /// Columns in declaration order
    #[serde(default)]
    #[builder(default)]
    columns: Vec<ColumnDescriptor>,
    /// Partition tokens such as `dt=2020-01-01/region=us`, oldest first
    #[serde(default)]
    #[builder(default)]
    known_partition_values: Vec<String>,
}

impl TableMetadata {
    /// Creates table metadata with no known partitions.
    pub fn new(
        schema_name: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            table_name: table_name.into(),
            columns,
            known_partition_values: Vec::new(),
        }
    }

    /// Replaces the known partition values.
    pub fn with_partitions<I, S>(mut self, partitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_partition_values = partitions.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the known partition values from a JSON array of strings.
    ///
    /// Metastores commonly persist the latest partitions as a JSON-encoded
    /// list. A missing or blank string means no partitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use querysample_core::TableMetadata;
    ///
    /// let table = TableMetadata::new("s", "t", vec![])
    ///     .with_partitions_json(Some(r#"["dt=2020-01-01", "dt=2020-01-02"]"#))
    ///     .unwrap();
    /// assert_eq!(table.latest_partition(), Some("dt=2020-01-02"));
    /// ```
    pub fn with_partitions_json(mut self, raw: Option<&str>) -> serde_json::Result<Self> {
        self.known_partition_values = match raw.map(str::trim) {
            Some(json) if !json.is_empty() => serde_json::from_str(json)?,
            _ => Vec::new(),
        };
        Ok(self)
    }

    /// Fully qualified `schema.table` name.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema_name, self.table_name)
    }

    /// The most recently observed partition, if any.
    pub fn latest_partition(&self) -> Option<&str> {
        self.known_partition_values.last().map(String::as_str)
    }

    /// Whether `partition` is exactly one of the known partition values.
    pub fn has_partition(&self, partition: &str) -> bool {
        self.known_partition_values.iter().any(|p| p == partition)
    }

    /// Looks up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name() == name)
    }
}
