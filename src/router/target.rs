//! Named navigation targets and their URL form.

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

use super::routes;

/// A named route plus query parameters, e.g. `{name: "auth-login", query: {redirect: "/documents"}}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    pub name: String,
    pub query: Vec<(String, String)>,
}

impl NavigationTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), query: Vec::new() }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Render as a URL path with a percent-encoded query string.
    ///
    /// Names missing from the page table fall back to `/`.
    pub fn to_url(&self) -> String {
        let path = routes::path_for(&self.name).unwrap_or("/");
        if self.query.is_empty() {
            return path.to_owned();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}
