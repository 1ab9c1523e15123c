//! Unified error types for the service.

use thiserror::Error;

/// Unified error type for startup failures.
///
/// Request-path errors have no representation here; routing misses and
/// unsupported methods are answered by the framework's defaults.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The configured host is not a valid IP address.
    #[error("invalid bind address {host:?}")]
    InvalidBindAddress {
        /// The host string that failed to parse.
        host: String,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
