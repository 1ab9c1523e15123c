//! Three-page web service used for CI/CD hands-on deployments.
//!
//! The service exposes three fixed plain-text routes and nothing else:
//!
//! ```text
//! GET /        -> "Hello, World! and the cicd handson was successful!"
//! GET /about   -> "This is the About page."
//! GET /health  -> "OK"
//! ```
//!
//! Anything not listed above falls through to the framework's default
//! not-found response. The process binds `0.0.0.0:8000` unless overridden
//! through the environment or the CLI.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP router and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
