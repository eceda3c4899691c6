//! Identity provider seam
//!
//! The provider is the external party that authenticates the user and hands
//! back an assertion for this site. This crate only consumes its single
//! completion: it never inspects the token or talks the provider protocol.

use async_trait::async_trait;

/// Opaque identity assertion issued by the provider for one login attempt
///
/// The relying client forwards the token verbatim; only the relying server
/// (and its verifier) look inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion(String);

impl Assertion {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Assertion {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Trait for requesting a verified-email assertion from an identity provider
///
/// An invocation resolves exactly once: `Some(assertion)` when the user
/// completed identity selection, `None` when they cancelled. The call
/// suspends for as long as the provider-controlled UI is open.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Ask the provider for an assertion covering this site
    async fn request_verified_email(&self) -> Option<Assertion>;
}

/// Allow using Box<dyn IdentityProvider> as an IdentityProvider
#[async_trait]
impl IdentityProvider for Box<dyn IdentityProvider> {
    async fn request_verified_email(&self) -> Option<Assertion> {
        (**self).request_verified_email().await
    }
}

/// Provider that resolves with a pre-configured answer (for development)
///
/// Stands in for a real provider dialog in demos and tests: either always
/// hands out the same assertion or always cancels.
pub struct StaticProvider {
    assertion: Option<Assertion>,
}

impl StaticProvider {
    /// Provider that completes with the given assertion
    pub fn assertion(token: impl Into<String>) -> Self {
        Self {
            assertion: Some(Assertion::new(token)),
        }
    }

    /// Provider that cancels identity selection
    pub fn cancelled() -> Self {
        Self { assertion: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticProvider {
    async fn request_verified_email(&self) -> Option<Assertion> {
        self.assertion.clone()
    }
}
