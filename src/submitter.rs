//! Login-assertion submission flow
//!
//! Takes an assertion from the identity provider, posts it to the relying
//! server's login endpoint, and reacts to the outcome: redirect on success,
//! alert on failure, silence on cancellation or a null session.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::browser::{AlertSink, CookieReader, Navigator};
use crate::config::LoginConfig;
use crate::error::RelierError;
use crate::provider::{Assertion, IdentityProvider};
use crate::Result;

/// Server response to a successful login
///
/// The body may also be `null`, meaning "no session"; that case never
/// reaches this type.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Where to send the user next
    pub next_url: String,
}

/// How a login attempt resolved
///
/// Each attempt runs {Idle} -> {AwaitingAssertion} -> {AwaitingServerResponse}
/// and ends in exactly one of these. Only `Redirected` moves the page;
/// only `Failed` shows an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The user cancelled identity selection (reserved logged-out handling)
    Cancelled,
    /// The server answered with a null session (reserved logged-out handling)
    NoSession,
    /// The page was navigated to the server-supplied URL
    Redirected(String),
    /// The redirect target fell outside the configured allow-list
    Blocked(String),
    /// Transport or server failure; the user has been alerted
    Failed(String),
}

/// The login submission component
///
/// Construction is the one-time initialization the embedding host performs;
/// `login` is the click-triggered entry point. The submitter owns no state
/// across attempts, so concurrent calls run as independent flows.
pub struct LoginSubmitter<P, C, N, A> {
    client: Client,
    endpoint: Url,
    config: LoginConfig,
    provider: P,
    cookies: C,
    navigator: N,
    alerts: A,
}

impl<P, C, N, A> LoginSubmitter<P, C, N, A>
where
    P: IdentityProvider,
    C: CookieReader,
    N: Navigator,
    A: AlertSink,
{
    /// Create a submitter posting to `login_path` under `base_url`
    pub fn new(
        base_url: Url,
        config: LoginConfig,
        provider: P,
        cookies: C,
        navigator: N,
        alerts: A,
    ) -> Result<Self> {
        let endpoint = base_url.join(&config.login_path)?;

        let mut builder = Client::builder();
        if !config.timeout.is_zero() {
            builder = builder.timeout(config.timeout);
        }
        let client = builder.build().map_err(RelierError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint,
            config,
            provider,
            cookies,
            navigator,
            alerts,
        })
    }

    /// The resolved login endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one login attempt, from identity selection to resolution
    ///
    /// The embedding host calls this from its login-control click handler
    /// (after suppressing the control's default action). The call suspends
    /// while the provider UI is open and again for the HTTP round-trip; it
    /// takes `&self`, so overlapping attempts are not coordinated.
    pub async fn login(&self) -> LoginOutcome {
        tracing::debug!("login requested");

        match self.provider.request_verified_email().await {
            Some(assertion) => self.submit_assertion(&assertion).await,
            None => {
                tracing::debug!("identity selection cancelled");
                LoginOutcome::Cancelled
            }
        }
    }

    /// Post an assertion to the login endpoint and handle the response
    pub async fn submit_assertion(&self, assertion: &Assertion) -> LoginOutcome {
        let mut form: Vec<(&str, String)> = Vec::with_capacity(2);
        form.push(("assertion", assertion.as_str().to_string()));
        if self.config.include_csrf_token {
            // An absent cookie still sends the parameter, with an empty value
            let token = self.cookies.get(&self.config.csrf_cookie).unwrap_or_default();
            form.push((self.config.csrf_cookie.as_str(), token));
        }

        let response = self.client.post(self.endpoint.clone()).form(&form).send().await;

        match response {
            Ok(res) if res.status().is_success() => {
                match res.json::<Option<LoginResponse>>().await {
                    Ok(Some(body)) => self.on_login_success(body),
                    Ok(None) => {
                        tracing::debug!("server reported no session");
                        LoginOutcome::NoSession
                    }
                    Err(err) => self.fail(&err.to_string()),
                }
            }
            Ok(res) => {
                let status = res.status();
                tracing::debug!(%status, "login endpoint returned an error status");
                let payload = match res.text().await {
                    Ok(body) if !body.is_empty() => body,
                    _ => status.to_string(),
                };
                self.fail(&payload)
            }
            Err(err) => self.fail(&transport_payload(&err)),
        }
    }

    /// Navigate to the server-supplied URL
    fn on_login_success(&self, response: LoginResponse) -> LoginOutcome {
        if !self.redirect_allowed(&response.next_url) {
            tracing::warn!(next_url = %response.next_url, "refusing redirect outside allow-list");
            return LoginOutcome::Blocked(response.next_url);
        }

        tracing::info!(next_url = %response.next_url, "login succeeded");
        self.navigator.navigate(&response.next_url);
        LoginOutcome::Redirected(response.next_url)
    }

    fn fail(&self, payload: &str) -> LoginOutcome {
        self.alerts.alert(&format!("login failure{}", payload));
        LoginOutcome::Failed(payload.to_string())
    }

    /// Check an absolute redirect target against the allow-list
    ///
    /// Relative targets stay on the relying server and always pass.
    fn redirect_allowed(&self, target: &str) -> bool {
        let hosts = match &self.config.allowed_redirect_hosts {
            Some(hosts) => hosts,
            None => return true,
        };

        match Url::parse(target) {
            Ok(url) => match url.host_str() {
                Some(host) => hosts.iter().any(|allowed| allowed == host),
                None => false,
            },
            Err(_) => true,
        }
    }
}

/// Describe a transport-level failure for the alert
fn transport_payload(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "timeout".to_string()
    } else {
        err.to_string()
    }
}
