//! Input/output: pattern loading, command-line handling, and error types

/// Command-line interface for the pattern inspector
pub mod cli;
/// Rendering symbols and command-line defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Stderr logger for the `log` facade
pub mod logging;
/// Rectangular symbol pattern loading
pub mod pattern;
