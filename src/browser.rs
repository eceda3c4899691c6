//! Browser-owned surfaces as injected capabilities
//!
//! The cookie store, page location, and alert dialog belong to the
//! embedding environment, not to this component. Modelling them as traits
//! keeps the login flow testable without a real browser.

pub mod console;

pub use console::{ConsoleAlertSink, ConsoleNavigator};

/// Read-only access to the ambient cookie store
pub trait CookieReader: Send + Sync {
    /// Look up the value of a named cookie, `None` when absent
    fn get(&self, name: &str) -> Option<String>;
}

/// Control over the current page location
pub trait Navigator: Send + Sync {
    /// Navigate the page to the given URL
    fn navigate(&self, url: &str);
}

/// Blocking user-facing alert surface
pub trait AlertSink: Send + Sync {
    /// Show a blocking alert with the given message
    fn alert(&self, message: &str);
}

/// Allow using Box<dyn CookieReader> as a CookieReader
impl CookieReader for Box<dyn CookieReader> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Allow using Box<dyn Navigator> as a Navigator
impl Navigator for Box<dyn Navigator> {
    fn navigate(&self, url: &str) {
        (**self).navigate(url)
    }
}

/// Allow using Box<dyn AlertSink> as an AlertSink
impl AlertSink for Box<dyn AlertSink> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
