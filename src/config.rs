//! Login client configuration

use std::time::Duration;

/// Server path the assertion is posted to
pub const LOGIN_PATH: &str = "/login/browserid/";

/// Cookie carrying the anti-CSRF token
pub const CSRF_COOKIE: &str = "_xsrf";

#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// Path of the login endpoint, resolved against the base URL
    pub login_path: String,

    /// Whether to send the CSRF token alongside the assertion
    pub include_csrf_token: bool,

    /// Name of the cookie the CSRF token is read from
    pub csrf_cookie: String,

    /// HTTP timeout for the login request; `Duration::ZERO` leaves the
    /// transport default in place (no explicit timeout)
    pub timeout: Duration,

    /// Hosts an absolute `next_url` may redirect to; `None` trusts the
    /// server. Relative targets are always permitted.
    pub allowed_redirect_hosts: Option<Vec<String>>,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_string(),
            include_csrf_token: true,
            csrf_cookie: CSRF_COOKIE.to_string(),
            timeout: Duration::ZERO,
            allowed_redirect_hosts: None,
        }
    }
}

impl LoginConfig {
    /// Configuration for the variant that posts the assertion alone
    pub fn without_csrf_token() -> Self {
        Self {
            include_csrf_token: false,
            ..Self::default()
        }
    }
}
