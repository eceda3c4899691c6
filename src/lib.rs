//! BrowserID-NG Relying-Party Login Client
//!
//! The client half of a BrowserID-style login flow:
//! - The identity provider hands the user an assertion for this site
//! - This crate posts the assertion to the relying server's login endpoint
//! - On success the server answers with where to send the user next
//!
//! The browser-owned surfaces (cookie store, location, alert dialog) and the
//! identity provider itself are injected capabilities, so the component runs
//! and tests without a real browser environment.

pub mod browser;
pub mod config;
pub mod cookies;
pub mod error;
pub mod provider;
pub mod submitter;

pub use browser::{AlertSink, ConsoleAlertSink, ConsoleNavigator, CookieReader, Navigator};
pub use config::LoginConfig;
pub use cookies::{cookie_value, HeaderCookieReader};
pub use error::RelierError;
pub use provider::{Assertion, IdentityProvider, StaticProvider};
pub use submitter::{LoginOutcome, LoginResponse, LoginSubmitter};

/// Result type for browserid-relier operations
pub type Result<T> = std::result::Result<T, RelierError>;
