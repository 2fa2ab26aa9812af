//! Error types for the querysample sample-query engine.
//!
//! Every error records the source location where it was raised so that
//! validation failures can be traced back through the builder without a
//! backtrace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod sample;

pub use config::ConfigError;
pub use sample::{SampleBuildError, SampleBuildErrorKind, SampleBuildResult};

/// Umbrella error for callers that both load configuration and build queries.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum QuerySampleError {
    /// Sample query validation failed.
    #[display("{_0}")]
    Build(SampleBuildError),
    /// Configuration could not be loaded.
    #[display("{_0}")]
    Config(ConfigError),
}

impl QuerySampleError {
    /// Returns the build error kind, if this is a build failure.
    pub fn build_kind(&self) -> Option<&SampleBuildErrorKind> {
        match self {
            QuerySampleError::Build(err) => Some(err.kind()),
            QuerySampleError::Config(_) => None,
        }
    }
}

/// Result type for operations that may fail with [`QuerySampleError`].
pub type QuerySampleResult<T> = Result<T, QuerySampleError>;
