//! Error types for the relying-party client
//!
//! Only construction can fail with a typed error. Failures inside a login
//! flow are handled at the point of occurrence (the user sees an alert) and
//! never propagate to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelierError {
    #[error("Invalid login endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
