//! Error types for coordinate parsing, grid lookups, and pattern loading

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all grid and lattice operations
#[derive(Debug)]
pub enum LatticeError {
    /// A coordinate was parsed from the wrong number of components
    InvalidArity {
        /// Number of components the coordinate type requires
        expected: usize,
        /// Number of components that were supplied
        found: usize,
    },

    /// A textual coordinate component could not be converted
    InvalidComponent {
        /// The offending text
        value: String,
        /// Why the conversion failed
        reason: String,
    },

    /// A required location is absent after the expansion hook was consulted
    LocationNotFound {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
    },

    /// A grid pattern has no rows to infer a column count from
    EmptyPattern,

    /// A pattern row does not match the width of the first row
    RaggedPattern {
        /// Index of the offending row
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// A location factory named a different cell than the one requested
    MisplacedLocation {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
        /// Row named by the produced location
        found_row: i64,
        /// Column named by the produced location
        found_col: i64,
    },

    /// The location index and value table disagree
    ///
    /// Only reported by explicit consistency checks; every registration path
    /// writes a value together with its location.
    InconsistentGrid {
        /// Description of the mismatch
        reason: String,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A process-wide logger was installed before ours
    LoggerInstalled {
        /// Rejection reported by the logging facade
        source: log::SetLoggerError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArity { expected, found } => {
                write!(
                    f,
                    "Invalid coordinate arity: expected {expected} values, found {found}"
                )
            }
            Self::InvalidComponent { value, reason } => {
                write!(f, "Invalid coordinate component '{value}': {reason}")
            }
            Self::LocationNotFound { row, col } => {
                write!(f, "No location at row {row}, column {col}")
            }
            Self::EmptyPattern => write!(f, "Grid pattern must contain at least one row"),
            Self::RaggedPattern {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Pattern row {row} has {found} symbols, expected {expected}"
                )
            }
            Self::MisplacedLocation {
                row,
                col,
                found_row,
                found_col,
            } => {
                write!(
                    f,
                    "Location factory mapped ({row}, {col}) to ({found_row}, {found_col})"
                )
            }
            Self::InconsistentGrid { reason } => {
                write!(f, "Inconsistent grid state: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LoggerInstalled { source } => {
                write!(f, "Failed to install logger: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LatticeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for lattice results
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Attaches a path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`LatticeError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation attached
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| LatticeError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LatticeError {
    LatticeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a location-not-found error
pub const fn location_not_found(row: i64, col: i64) -> LatticeError {
    LatticeError::LocationNotFound { row, col }
}
