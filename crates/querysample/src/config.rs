//! Sampler configuration.

use querysample_core::{CanonicalColumnType, SampleQueryOptions};
use querysample_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroU64;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable prefix, e.g. `QUERYSAMPLE_DEFAULT_LIMIT=50`.
const ENV_PREFIX: &str = "QUERYSAMPLE";

const DEFAULT_LIMIT: NonZeroU64 = NonZeroU64::new(100).unwrap();

fn default_limit() -> NonZeroU64 {
    DEFAULT_LIMIT
}

/// Deployment settings for sample query construction.
///
/// ```toml
/// default_limit = 50
///
/// [type_aliases]
/// geography = "string"
/// hugeint = "number"
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct SamplerConfig {
    /// Row limit used when the caller does not provide one
    #[serde(default = "default_limit")]
    default_limit: NonZeroU64,

    /// Extra engine type names mapped to canonical types
    #[serde(default)]
    type_aliases: HashMap<String, CanonicalColumnType>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            type_aliases: HashMap::new(),
        }
    }
}

impl SamplerConfig {
    /// Loads configuration from an optional TOML file, overlaid with
    /// `QUERYSAMPLE_*` environment variables.
    ///
    /// Nested keys use a double underscore in the environment, for example
    /// `QUERYSAMPLE_TYPE_ALIASES__HUGEINT=number`.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::new(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let settings = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load config: {}", e)))?;
        Self::from_settings(settings)
    }

    /// Parses configuration from a TOML string, without environment overrides.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: config::Config) -> Result<Self, ConfigError> {
        let parsed: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid config: {}", e)))?;
        parsed.validate()?;
        info!(
            default_limit = parsed.default_limit.get(),
            alias_count = parsed.type_aliases.len(),
            "Loaded sampler configuration"
        );
        Ok(parsed)
    }

    /// Checks that every alias is a bare alphabetic type name.
    ///
    /// The classifier only ever looks up the leading alphabetic run of a type,
    /// so an alias like `int8` or `decimal(10,2)` could never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.type_aliases.keys() {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::new(format!(
                    "Type alias '{}' must be a bare alphabetic type name",
                    name
                )));
            }
        }
        debug!("Sampler configuration valid");
        Ok(())
    }

    /// Query options carrying only the configured default limit.
    pub fn options(&self) -> SampleQueryOptions {
        SampleQueryOptions::new(self.default_limit)
    }
}
