//! Common test utilities for login-flow integration tests

use std::sync::{Arc, RwLock};

use browserid_relier::{
    AlertSink, CookieReader, LoginConfig, LoginSubmitter, Navigator, StaticProvider,
};
use httpmock::MockServer;

/// Cookie store fake backed by a fixed set of pairs
#[derive(Default, Clone)]
pub struct FakeCookies {
    pairs: Vec<(String, String)>,
}

impl FakeCookies {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(name: &str, value: &str) -> Self {
        Self {
            pairs: vec![(name.to_string(), value.to_string())],
        }
    }
}

impl CookieReader for FakeCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(pair_name, _)| pair_name == name)
            .map(|(_, value)| value.clone())
    }
}

/// Navigator that records every target
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    /// Captured navigation targets, in order
    pub visited: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.read().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.visited.read().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.write().unwrap().push(url.to_string());
    }
}

/// Alert sink that records every message
#[derive(Default, Clone)]
pub struct RecordingAlerts {
    /// Captured alert messages, in order
    pub shown: Arc<RwLock<Vec<String>>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.shown.read().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.shown.read().unwrap().len()
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.shown.write().unwrap().push(message.to_string());
    }
}

/// Create a submitter wired to the mock server, with recording surfaces
pub fn submitter_for(
    server: &MockServer,
    config: LoginConfig,
    provider: StaticProvider,
    cookies: FakeCookies,
) -> (
    LoginSubmitter<StaticProvider, FakeCookies, RecordingNavigator, RecordingAlerts>,
    RecordingNavigator,
    RecordingAlerts,
) {
    let navigator = RecordingNavigator::new();
    let alerts = RecordingAlerts::new();

    let base_url = server.base_url().parse().expect("valid base URL");
    let submitter = LoginSubmitter::new(
        base_url,
        config,
        provider,
        cookies,
        navigator.clone(),
        alerts.clone(),
    )
    .expect("Failed to create submitter");

    (submitter, navigator, alerts)
}
