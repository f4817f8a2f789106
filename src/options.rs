use std::collections::HashMap;
use std::time::Duration;

use crate::types::Query;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-wide configuration, consumed at client-construction time.
///
/// Built with chained setters and immutable once the client is constructed:
///
/// ```
/// use std::time::Duration;
/// use httpc::{ClientOptions, Query};
///
/// let options = ClientOptions::new()
///     .base_url("https://example.com/api/v1")
///     .timeout(Duration::from_secs(20))
///     .with_default_header("x-api-key", "secret")
///     .with_default_query(Query::from([("page".to_string(), "1".to_string())]));
/// ```
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: HashMap<String, String>,
    pub(crate) default_query: Query,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: HashMap::new(),
            default_query: Query::new(),
        }
    }
}

impl ClientOptions {
    /// Options with an empty base URL, a 10-second timeout and empty
    /// default header/query maps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix prepended verbatim to every endpoint path. No
    /// normalization is performed; the caller must avoid double slashes.
    pub fn base_url(mut self, v: impl Into<String>) -> Self {
        self.base_url = v.into();
        self
    }

    /// Set the transport-level deadline applied to every request issued by
    /// the client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Insert or overwrite one header sent with every request.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Replace the query parameters sent with every request.
    pub fn with_default_query(mut self, query: Query) -> Self {
        self.default_query = query;
        self
    }
}
