//! Sample request files and command-line overrides.

use crate::Cli;
use anyhow::{Context, Result};
use querysample::{
    FilterSpec, SampleQueryBuilder, SampleQueryOptions, SamplerConfig, TableMetadata,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Contents of a request file.
///
/// ```toml
/// [table]
/// schema_name = "default"
/// table_name = "events"
/// known_partition_values = ["dt=2021-01-01"]
///
/// [[table.columns]]
/// name = "dt"
/// type = "string"
///
/// [options]
/// limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Table to sample
    pub table: TableMetadata,
    /// Query options; the configured default limit applies when absent
    #[serde(default)]
    pub options: Option<SampleQueryOptions>,
}

impl SampleRequest {
    /// Reads a request from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;
        let request: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse request file {}", path.display()))?;
        debug!(
            columns = request.table.columns().len(),
            partitions = request.table.known_partition_values().len(),
            "Loaded sample request"
        );
        Ok(request)
    }

    /// Resolves the final query options, with command-line flags taking
    /// precedence over the file and the file over configuration defaults.
    pub fn resolve_options(
        &self,
        cli: &Cli,
        config: &SamplerConfig,
    ) -> Result<SampleQueryOptions> {
        let mut options = self.options.clone().unwrap_or_else(|| config.options());
        if let Some(limit) = cli.limit {
            options = options.with_limit(limit);
        }
        if let Some(partition) = &cli.partition {
            options = options.with_partition_override(partition.clone());
        }
        if let Some(filter) = &cli.filter {
            let [column, operator, value] = filter.as_slice() else {
                anyhow::bail!("--filter takes exactly COLUMN OPERATOR VALUE");
            };
            options = options.with_filter(FilterSpec::new(column, operator, value));
        }
        if let Some(order_by) = &cli.order_by {
            options = options
                .with_order_by_column(order_by.clone())
                .with_order_by_ascending(!cli.desc);
        }
        Ok(options)
    }
}

/// Loads everything the command line points at and builds the query text.
pub fn render(cli: &Cli) -> Result<String> {
    let config = SamplerConfig::load(cli.config.as_deref())?;
    let request = SampleRequest::from_file(&cli.table)?;
    let options = request.resolve_options(cli, &config)?;
    let sql = SampleQueryBuilder::from_config(&config).build(&request.table, &options)?;
    Ok(sql)
}
