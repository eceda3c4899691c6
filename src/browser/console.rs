//! Console-based browser surfaces for development

use super::{AlertSink, Navigator};

/// Navigator that logs the target instead of moving a page (for development)
pub struct ConsoleNavigator;

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, url: &str) {
        println!("NAVIGATE -> {}", url);

        tracing::info!(url = %url, "Navigation requested");
    }
}

/// Alert sink that writes to the console (for development)
pub struct ConsoleAlertSink;

impl ConsoleAlertSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAlertSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for ConsoleAlertSink {
    fn alert(&self, message: &str) {
        println!();
        println!("========================================");
        println!("  ALERT: {}", message);
        println!("========================================");
        println!();

        tracing::warn!(message = %message, "Alert shown");
    }
}
