//! # httpc
//!
//! A small convenience layer over reqwest: a fluent configuration API for
//! building requests (base URL, default headers, default query parameters,
//! per-request overrides) and a thin response wrapper exposing status-code
//! predicates and JSON decoding.
//!
//! Connection management, TLS, retries and everything else below the
//! configured timeout belong to reqwest. The one piece of decision logic
//! here is the layered merge of configuration into a single outgoing
//! request: client defaults first, per-request overrides second, the
//! call-site query map third, later writers winning on key collision.
//!
//! ## Blocking client (default feature)
//!
//! ```no_run
//! use httpc::blocking::Client;
//! use httpc::{json_body, ClientOptions, Data, Query, RequestOptions};
//!
//! # fn main() -> Result<(), httpc::Error> {
//! let client = Client::new(
//!     ClientOptions::new()
//!         .base_url("https://example.com/api/v1")
//!         .with_default_header("x-api-key", "secret")
//!         .with_default_query(Query::from([("v".to_string(), "2".to_string())])),
//! )?;
//!
//! // GET with a call-site query map
//! let query = Query::from([("page".to_string(), "1".to_string())]);
//! let response = client.get("/users", Some(&query), None)?;
//! if response.is_ok() {
//!     let users: serde_json::Value = response.json()?;
//!     println!("{users}");
//! }
//!
//! // POST with a JSON body and per-request options
//! let mut data = Data::new();
//! data.insert("name".to_string(), "Alice".into());
//!
//! let options = RequestOptions::new()
//!     .with_json_content_type()
//!     .with_bearer_token("token123");
//!
//! let response = client.post("/users", json_body(&data)?, Some(&options))?;
//! assert!(response.is_created());
//! # Ok(())
//! # }
//! ```
//!
//! ## Async client (`async` feature)
//!
//! The same surface with `async fn` verbs lives in [`async_client`];
//! dropping a returned future cancels the in-flight request.
//!
//! ## Errors
//!
//! Two error kinds matter to callers: [`Error::Transport`] for network
//! failures, surfaced unchanged with no retries, and [`Error::Decode`] for
//! malformed or empty JSON bodies. 4xx/5xx statuses are never errors — use
//! the response predicates.

pub mod error;
pub mod options;
pub mod request;
pub mod types;

mod merge;

#[cfg(feature = "async")]
pub mod async_client;
#[cfg(feature = "blocking")]
pub mod blocking;

pub use error::Error;
pub use options::ClientOptions;
pub use request::RequestOptions;
pub use types::{json_body, Data, Query};

#[cfg(feature = "blocking")]
pub use blocking::{Client, Response};
