//! Sample query validation errors.

/// Validation failures raised while building a sample query.
///
/// Each variant carries the offending caller-supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SampleBuildErrorKind {
    /// Partition override is unknown, or a partition pair is malformed.
    #[display("Invalid partition {_0}")]
    InvalidPartition(String),
    /// Filter references a column the table does not have.
    #[display("Invalid filter column {_0}")]
    InvalidFilterColumn(String),
    /// Filter operator is outside the supported set.
    #[display("Invalid filter op {_0}")]
    InvalidFilterOperator(String),
    /// Numeric column compared against a non-digit value.
    #[display("Invalid numeric filter value {_0}")]
    InvalidNumericValue(String),
    /// Boolean column compared against something other than `true`/`false`.
    #[display("Invalid boolean filter value {_0}")]
    InvalidBooleanValue(String),
    /// Order-by references a column the table does not have.
    #[display("Invalid order by {_0}")]
    InvalidOrderByColumn(String),
}

impl SampleBuildErrorKind {
    /// Name of the caller-facing field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            SampleBuildErrorKind::InvalidPartition(_) => "partition",
            SampleBuildErrorKind::InvalidFilterColumn(_) => "filter.column",
            SampleBuildErrorKind::InvalidFilterOperator(_) => "filter.operator",
            SampleBuildErrorKind::InvalidNumericValue(_)
            | SampleBuildErrorKind::InvalidBooleanValue(_) => "filter.value",
            SampleBuildErrorKind::InvalidOrderByColumn(_) => "order_by",
        }
    }

    /// The offending value as supplied by the caller.
    pub fn value(&self) -> &str {
        match self {
            SampleBuildErrorKind::InvalidPartition(v)
            | SampleBuildErrorKind::InvalidFilterColumn(v)
            | SampleBuildErrorKind::InvalidFilterOperator(v)
            | SampleBuildErrorKind::InvalidNumericValue(v)
            | SampleBuildErrorKind::InvalidBooleanValue(v)
            | SampleBuildErrorKind::InvalidOrderByColumn(v) => v,
        }
    }
}

/// Sample query build error with location tracking.
///
/// # Examples
///
/// ```
/// use querysample_error::{SampleBuildError, SampleBuildErrorKind};
///
/// let err = SampleBuildError::new(SampleBuildErrorKind::InvalidOrderByColumn("nope".into()));
/// assert_eq!(err.kind().field(), "order_by");
/// assert!(format!("{}", err).contains("Invalid order by nope"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Sample Build Error: {} at line {} in {}", kind, line, file)]
pub struct SampleBuildError {
    kind: SampleBuildErrorKind,
    line: u32,
    file: &'static str,
}

impl SampleBuildError {
    /// Create a new build error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SampleBuildErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SampleBuildErrorKind {
        &self.kind
    }

    /// Line number where the error was raised.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was raised.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

impl From<SampleBuildErrorKind> for SampleBuildError {
    #[track_caller]
    fn from(kind: SampleBuildErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for sample query construction.
pub type SampleBuildResult<T> = Result<T, SampleBuildError>;
