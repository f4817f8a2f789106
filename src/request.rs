use std::collections::HashMap;

use crate::types::Query;

/// Per-request overrides, scoped to a single verb invocation.
///
/// Knows nothing about client defaults; the merge happens at dispatch time
/// with request-level values winning on key collision.
///
/// ```
/// use httpc::RequestOptions;
///
/// let options = RequestOptions::new()
///     .with_json_content_type()
///     .with_bearer_token("token123");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query: Option<Query>,
}

impl RequestOptions {
    /// Options with empty headers and no query map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (replace) the query parameters for this request.
    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Insert or overwrite one header for this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Shortcut for setting the `Content-Type` header.
    pub fn with_content_type(self, value: impl Into<String>) -> Self {
        self.with_header("Content-Type", value)
    }

    /// Shortcut for setting the `Content-Type` header to `application/json`.
    pub fn with_json_content_type(self) -> Self {
        self.with_content_type("application/json")
    }

    /// Shortcut for setting the `Authorization` header, prepending the
    /// `Bearer` keyword to the token.
    pub fn with_bearer_token(self, token: impl AsRef<str>) -> Self {
        let token = token.as_ref();
        self.with_header("Authorization", format!("Bearer {token}"))
    }
}
