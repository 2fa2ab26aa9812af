//! Column type classification and sample query construction.
//!
//! Given a table's columns and known partitions plus a handful of caller
//! options, [`SampleQueryBuilder`] produces a bounded `SELECT * ... LIMIT n`
//! statement for previewing the table. Column types from any supported SQL
//! dialect are first normalised by [`TypeClassifier`], and those canonical
//! types decide how partition and filter values are validated and quoted.
//!
//! ```
//! use querysample::{build_sample_query, ColumnDescriptor, FilterSpec, SampleQueryOptions, TableMetadata};
//! use std::num::NonZeroU64;
//!
//! let table = TableMetadata::new(
//!     "s",
//!     "t",
//!     vec![ColumnDescriptor::new("dt", "string"), ColumnDescriptor::new("cnt", "bigint")],
//! )
//! .with_partitions(["dt=2021-01-01"]);
//!
//! let options = SampleQueryOptions::new(NonZeroU64::new(10).unwrap())
//!     .with_filter(FilterSpec::new("cnt", "=", "5"))
//!     .with_order_by_column("cnt".to_string())
//!     .with_order_by_ascending(false);
//!
//! let sql = build_sample_query(&table, &options).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM s.t\nWHERE dt='2021-01-01' AND cnt = 5\nORDER BY cnt DESC\nLIMIT 10"
//! );
//! ```
//!
//! Nothing in this crate performs I/O apart from [`SamplerConfig::load`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod classifier;
mod config;
mod filter;
mod partition;

pub use builder::{SampleQueryBuilder, build_sample_query};
pub use classifier::{TypeClassifier, builtin_type, classify, leading_type_name};
pub use config::SamplerConfig;
pub use filter::{filter_predicate, quote_string_literal};
pub use partition::{partition_predicate, resolve_partition};

pub use querysample_core::{
    CanonicalColumnType, ColumnDescriptor, FilterOperator, FilterSpec, SampleQueryOptions,
    SampleQueryOptionsBuilder, TableMetadata, TableMetadataBuilder,
};
pub use querysample_error::{
    ConfigError, QuerySampleError, QuerySampleResult, SampleBuildError, SampleBuildErrorKind,
    SampleBuildResult,
};
