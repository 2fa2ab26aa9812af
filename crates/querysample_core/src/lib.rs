//! Core data types for the querysample sample-query engine.
//!
//! This crate holds the table metadata and caller options consumed by the
//! sample query builder. Nothing here performs I/O.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod column;
mod filter;
mod options;
mod table;

pub use column::{CanonicalColumnType, ColumnDescriptor};
pub use filter::{FilterOperator, FilterSpec};
pub use options::{SampleQueryOptions, SampleQueryOptionsBuilder, SampleQueryOptionsBuilderError};
pub use table::{TableMetadata, TableMetadataBuilder, TableMetadataBuilderError};
