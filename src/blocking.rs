//! Blocking client built on `reqwest::blocking`.
//!
//! Each verb call blocks the calling thread until the transport call
//! completes or the configured timeout fires. A constructed [`Client`] is
//! read-only and can be shared across threads; connection reuse is
//! reqwest's concern.
//!
//! # Example
//!
//! ```no_run
//! use httpc::blocking::Client;
//! use httpc::{ClientOptions, Query, RequestOptions};
//!
//! # fn main() -> Result<(), httpc::Error> {
//! let client = Client::new(
//!     ClientOptions::new()
//!         .base_url("https://example.com/api/v1")
//!         .with_default_header("x-api-key", "secret"),
//! )?;
//!
//! let query = Query::from([("page".to_string(), "1".to_string())]);
//! let options = RequestOptions::new().with_bearer_token("token123");
//!
//! let response = client.get("/users", Some(&query), Some(&options))?;
//! if response.is_ok() {
//!     let users: serde_json::Value = response.json()?;
//!     println!("{users}");
//! }
//! # Ok(())
//! # }
//! ```

use http::Method;
use reqwest::blocking::Body;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::merge::{merged_headers, merged_query};
use crate::options::ClientOptions;
use crate::request::RequestOptions;
use crate::types::Query;

/// A blocking HTTP client carrying client-wide defaults.
///
/// Composes client options, per-request options and the call-site query map
/// into one outgoing request and delegates to reqwest. Transport errors are
/// propagated unchanged; 4xx/5xx statuses are not errors — inspect the
/// [`Response`] predicates instead.
pub struct Client {
    options: ClientOptions,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client from the given options. The configured timeout is
    /// applied to every request the client issues.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .build()?;

        Ok(Self { options, http })
    }

    /// Perform a GET request.
    pub fn get(
        &self,
        endpoint: &str,
        query: Option<&Query>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, Error> {
        self.dispatch(Method::GET, endpoint, query, None, options)
    }

    /// Perform a POST request.
    pub fn post(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, Error> {
        self.dispatch(Method::POST, endpoint, None, Some(body.into()), options)
    }

    /// Perform a PATCH request.
    pub fn patch(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, Error> {
        self.dispatch(Method::PATCH, endpoint, None, Some(body.into()), options)
    }

    /// Perform a PUT request.
    pub fn put(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, Error> {
        self.dispatch(Method::PUT, endpoint, None, Some(body.into()), options)
    }

    /// Perform a DELETE request.
    pub fn delete(&self, endpoint: &str, options: Option<&RequestOptions>) -> Result<Response, Error> {
        self.dispatch(Method::DELETE, endpoint, None, None, options)
    }

    fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&Query>,
        body: Option<Body>,
        options: Option<&RequestOptions>,
    ) -> Result<Response, Error> {
        // Base URL and endpoint are concatenated verbatim, no normalization.
        let url = format!("{}{}", self.options.base_url, endpoint);

        let mut builder = self.http.request(method.clone(), &url);

        builder = builder.headers(merged_headers(&self.options, options)?);

        let merged = merged_query(&self.options, options, query);
        if !merged.is_empty() {
            builder = builder.query(&merged);
        }

        if let Some(body) = body {
            builder = builder.body(body);
        }

        tracing::debug!(method = %method, url = %url, "dispatching request");

        let response = builder.send()?;

        tracing::debug!(status = response.status().as_u16(), "response received");

        Ok(Response::new(response))
    }
}

/// A thin wrapper over the raw transport response.
///
/// Body-consuming methods take `self`, so the single-read body stream is
/// consumed exactly once and released on every exit path, including decode
/// failure.
pub struct Response {
    inner: reqwest::blocking::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::blocking::Response) -> Self {
        Self { inner }
    }

    /// The raw numeric status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Whether the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.inner.status() == http::StatusCode::OK
    }

    /// Whether the status is exactly 201.
    pub fn is_created(&self) -> bool {
        self.inner.status() == http::StatusCode::CREATED
    }

    /// Whether the status is exactly 204.
    pub fn is_no_content(&self) -> bool {
        self.inner.status() == http::StatusCode::NO_CONTENT
    }

    /// Whether the status is exactly 400.
    pub fn is_bad_request(&self) -> bool {
        self.inner.status() == http::StatusCode::BAD_REQUEST
    }

    /// Whether the status is exactly 404.
    pub fn is_not_found(&self) -> bool {
        self.inner.status() == http::StatusCode::NOT_FOUND
    }

    /// Decode the response body as JSON.
    ///
    /// An empty body is a decode error, not "no content".
    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        let bytes = self.inner.bytes()?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// Read the entire body into memory as raw bytes.
    pub fn bytes(self) -> Result<Vec<u8>, Error> {
        Ok(self.inner.bytes()?.to_vec())
    }

    /// Read the entire body into memory as a string.
    pub fn text(self) -> Result<String, Error> {
        Ok(self.inner.text()?)
    }

    /// Escape hatch: the raw reqwest response, for anything not covered by
    /// the methods above.
    pub fn into_inner(self) -> reqwest::blocking::Response {
        self.inner
    }
}
