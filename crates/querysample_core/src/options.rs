//! Caller options for a sample query.

use crate::FilterSpec;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

fn default_ascending() -> bool {
    true
}

/// Options controlling the shape of a sample query.
///
/// # Examples
///
/// ```
/// use querysample_core::{FilterSpec, SampleQueryOptionsBuilder};
/// use std::num::NonZeroU64;
///
/// let options = SampleQueryOptionsBuilder::default()
///     .limit(NonZeroU64::new(10).unwrap())
///     .filter(FilterSpec::new("cnt", "=", "5"))
///     .order_by_column("cnt")
///     .order_by_ascending(false)
///     .build()
///     .unwrap();
/// assert_eq!(options.limit().get(), 10);
/// assert!(options.partition_override().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Builder,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option)]
pub struct SampleQueryOptions {
    /// Maximum number of rows the query returns
    limit: NonZeroU64,

    /// Partition token to use instead of the latest known one
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    partition_override: Option<String>,

    /// Optional single filter predicate
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    filter: Option<FilterSpec>,

    /// Optional column to order by
    #[serde(default)]
    #[builder(default, setter(into, strip_option))]
    order_by_column: Option<String>,

    /// Sort direction for `order_by_column`
    #[serde(default = "default_ascending")]
    #[builder(default = "true")]
    order_by_ascending: bool,
}

impl SampleQueryOptions {
    /// Options with the given limit and nothing else set.
    pub fn new(limit: NonZeroU64) -> Self {
        Self {
            limit,
            partition_override: None,
            filter: None,
            order_by_column: None,
            order_by_ascending: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_builder_defaults_to_ascending() {
        let options = SampleQueryOptionsBuilder::default()
            .limit(limit(5))
            .build()
            .unwrap();
        assert!(*options.order_by_ascending());
        assert_eq!(options, SampleQueryOptions::new(limit(5)));
    }

    #[test]
    fn test_builder_requires_limit() {
        assert!(SampleQueryOptionsBuilder::default().build().is_err());
    }

    #[test]
    fn test_setters_strip_option() {
        let options = SampleQueryOptions::new(limit(1))
            .with_partition_override("dt=2020-01-01".to_string())
            .with_order_by_column("dt".to_string());
        assert_eq!(options.partition_override().as_deref(), Some("dt=2020-01-01"));
        assert_eq!(options.order_by_column().as_deref(), Some("dt"));
    }

    #[test]
    fn test_deserialize_rejects_zero_limit() {
        let parsed: Result<SampleQueryOptions, _> = toml::from_str("limit = 0");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let options: SampleQueryOptions = toml::from_str("limit = 25").unwrap();
        assert_eq!(options.limit().get(), 25);
        assert!(*options.order_by_ascending());
        assert!(options.filter().is_none());
    }
}
