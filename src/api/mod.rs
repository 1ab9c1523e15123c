//! HTTP API module for the three fixed pages.

pub mod handlers;
pub mod routes;

pub use routes::create_router;
