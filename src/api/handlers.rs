//! HTTP API handlers.
//!
//! Every handler returns a fixed `&'static str`, which axum serves as a
//! plain-text 200 response. No request input is read anywhere.

/// Body served at `/`.
pub const HOME_BODY: &str = "Hello, World! and the cicd handson was successful!";

/// Body served at `/about`.
pub const ABOUT_BODY: &str = "This is the About page.";

/// Body served at `/health`.
pub const HEALTH_BODY: &str = "OK";

/// Home page handler.
pub async fn home() -> &'static str {
    HOME_BODY
}

/// About page handler.
pub async fn about() -> &'static str {
    ABOUT_BODY
}

/// Health check handler - always returns 200.
pub async fn health() -> &'static str {
    HEALTH_BODY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handlers_return_fixed_bodies() {
        assert_eq!(home().await, HOME_BODY);
        assert_eq!(about().await, ABOUT_BODY);
        assert_eq!(health().await, "OK");
    }
}
