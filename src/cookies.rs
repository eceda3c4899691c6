//! Cookie lookup against a raw `Cookie` header
//!
//! A pure, synchronous helper: no error path, absence is `None`.

use cookie::Cookie;

use crate::browser::CookieReader;

/// Find the value of a named cookie within a `Cookie` header string
///
/// Pairs are matched by exact name; a header without the cookie (or an
/// empty header) yields `None`.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(|cookie| cookie.ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// CookieReader over a captured `Cookie` header string
///
/// The embedding host hands over whatever its environment exposes as the
/// current cookie header; lookups never touch the environment again.
pub struct HeaderCookieReader {
    header: String,
}

impl HeaderCookieReader {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl CookieReader for HeaderCookieReader {
    fn get(&self, name: &str) -> Option<String> {
        cookie_value(&self.header, name)
    }
}
