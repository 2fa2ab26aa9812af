//! Partition selection and predicate rendering.

use crate::builder::reject;
use querysample_core::{CanonicalColumnType, TableMetadata};
use querysample_error::{SampleBuildErrorKind, SampleBuildResult};
use std::collections::HashMap;
use tracing::debug;

/// Picks the partition a sample query should read.
///
/// Without an override this is the latest known partition, or `None` when the
/// table has no partitions. An override must exactly match one of the known
/// partitions; a table with no known partitions accepts no override.
pub fn resolve_partition<'a>(
    table: &'a TableMetadata,
    partition_override: Option<&'a str>,
) -> SampleBuildResult<Option<&'a str>> {
    match partition_override {
        None => {
            let latest = table.latest_partition();
            debug!(partition = ?latest, "Defaulting to latest partition");
            Ok(latest)
        }
        Some(partition) if table.has_partition(partition) => {
            debug!(partition, "Using partition override");
            Ok(Some(partition))
        }
        Some(partition) => Err(reject(SampleBuildErrorKind::InvalidPartition(
            partition.to_string(),
        ))),
    }
}

/// Renders a partition token such as `dt=2020-01-01/region=us` as a predicate.
///
/// Each `key=value` pair becomes `key='value'` for string columns and
/// `key=value` otherwise; pairs are joined with `AND`. Partition values come
/// from the metastore and are quoted verbatim.
///
/// Fails with [`SampleBuildErrorKind::InvalidPartition`] when a pair has no
/// `=` or names a column the table does not have.
///
/// # Examples
///
/// ```
/// use querysample::{partition_predicate, CanonicalColumnType};
/// use std::collections::HashMap;
///
/// let types = HashMap::from([
///     ("dt".to_string(), CanonicalColumnType::String),
///     ("hr".to_string(), CanonicalColumnType::Number),
/// ]);
/// assert_eq!(
///     partition_predicate("dt=2020-01-01/hr=5", &types).unwrap(),
///     "dt='2020-01-01' AND hr=5"
/// );
/// ```
pub fn partition_predicate(
    partition: &str,
    column_types: &HashMap<String, CanonicalColumnType>,
) -> SampleBuildResult<String> {
    let pairs = partition
        .split('/')
        .map(|pair| {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(reject(SampleBuildErrorKind::InvalidPartition(
                    pair.to_string(),
                )));
            };
            match column_types.get(key) {
                Some(CanonicalColumnType::String) => Ok(format!("{key}='{value}'")),
                Some(_) => Ok(format!("{key}={value}")),
                None => Err(reject(SampleBuildErrorKind::InvalidPartition(
                    pair.to_string(),
                ))),
            }
        })
        .collect::<SampleBuildResult<Vec<_>>>()?;
    Ok(pairs.join(" AND "))
}
