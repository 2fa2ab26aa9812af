//! Sample query assembly.

use crate::{
    SamplerConfig, TypeClassifier, filter_predicate, partition_predicate, resolve_partition,
};
use querysample_core::{SampleQueryOptions, TableMetadata};
use querysample_error::{SampleBuildError, SampleBuildErrorKind, SampleBuildResult};
use tracing::{debug, instrument, warn};

/// Logs and wraps a validation failure.
#[track_caller]
pub(crate) fn reject(kind: SampleBuildErrorKind) -> SampleBuildError {
    warn!(field = kind.field(), value = kind.value(), "Rejected sample query input");
    SampleBuildError::new(kind)
}

/// Builds bounded preview queries for tables.
///
/// The builder is immutable and can be shared across threads; every call to
/// [`build`](Self::build) reads only its arguments.
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct SampleQueryBuilder {
    classifier: TypeClassifier,
}

impl SampleQueryBuilder {
    /// Builder using the built-in type dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder using a custom classifier.
    pub fn with_classifier(classifier: TypeClassifier) -> Self {
        Self { classifier }
    }

    /// Builder whose classifier includes the configured type aliases.
    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::with_classifier(TypeClassifier::new().with_aliases(config.type_aliases()))
    }

    /// Builds a `SELECT * ... LIMIT n` statement for `table`.
    ///
    /// Clauses appear one per line; absent clauses are omitted:
    ///
    /// ```text
    /// SELECT * FROM schema.table
    /// WHERE <partition predicate> AND <filter predicate>
    /// ORDER BY <column> ASC|DESC
    /// LIMIT <limit>
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`SampleBuildError`] when the partition override is unknown,
    /// a partition pair is malformed, the filter or order-by column does not
    /// exist, the filter operator is unsupported, or the filter value does not
    /// fit the column's type.
    #[instrument(
        skip_all,
        fields(
            table = %table.full_name(),
            limit = options.limit().get(),
            has_filter = options.filter().is_some(),
            has_partition_override = options.partition_override().is_some()
        )
    )]
    pub fn build(
        &self,
        table: &TableMetadata,
        options: &SampleQueryOptions,
    ) -> SampleBuildResult<String> {
        let column_types = self.classifier.column_types(table);
        let mut predicates = Vec::new();

        // An empty token selects the whole table.
        if let Some(partition) =
            resolve_partition(table, options.partition_override().as_deref())?
                .filter(|partition| !partition.is_empty())
        {
            predicates.push(partition_predicate(partition, &column_types)?);
        }

        if let Some(filter) = options.filter() {
            predicates.push(filter_predicate(filter, &column_types)?);
        }

        let order_by = match options.order_by_column() {
            Some(column) if column_types.contains_key(column) => {
                let direction = if *options.order_by_ascending() {
                    "ASC"
                } else {
                    "DESC"
                };
                Some(format!("ORDER BY {column} {direction}"))
            }
            Some(column) => {
                return Err(reject(SampleBuildErrorKind::InvalidOrderByColumn(
                    column.clone(),
                )));
            }
            None => None,
        };

        let mut lines = vec![format!("SELECT * FROM {}", table.full_name())];
        if !predicates.is_empty() {
            lines.push(format!("WHERE {}", predicates.join(" AND ")));
        }
        lines.extend(order_by);
        lines.push(format!("LIMIT {}", options.limit()));

        debug!(predicate_count = predicates.len(), "Built sample query");
        Ok(lines.join("\n"))
    }
}

/// Builds a sample query with the built-in type dictionary.
///
/// Shorthand for `SampleQueryBuilder::new().build(table, options)`.
pub fn build_sample_query(
    table: &TableMetadata,
    options: &SampleQueryOptions,
) -> SampleBuildResult<String> {
    SampleQueryBuilder::new().build(table, options)
}
