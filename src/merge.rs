//! Layered merging of client defaults, request overrides and call-site
//! query parameters into one outgoing request.
//!
//! Merge order is deterministic: client defaults first, request-level
//! overrides second, call-site query third (query only). Later writers
//! overwrite earlier ones on key collision.

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::Error;
use crate::options::ClientOptions;
use crate::request::RequestOptions;
use crate::types::Query;

/// Build the outgoing header map: client defaults, then request-level
/// headers. `HeaderMap::insert` replaces, so the request value wins.
pub(crate) fn merged_headers(
    options: &ClientOptions,
    request: Option<&RequestOptions>,
) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    for (name, value) in &options.default_headers {
        headers.insert(
            HeaderName::try_from(name.as_str())?,
            HeaderValue::try_from(value.as_str())?,
        );
    }

    if let Some(request) = request {
        for (name, value) in &request.headers {
            headers.insert(
                HeaderName::try_from(name.as_str())?,
                HeaderValue::try_from(value.as_str())?,
            );
        }
    }

    Ok(headers)
}

/// Build the outgoing query map: client defaults, overlaid with the
/// request-level map, overlaid with the call-site map.
pub(crate) fn merged_query(
    options: &ClientOptions,
    request: Option<&RequestOptions>,
    call_site: Option<&Query>,
) -> Query {
    let mut merged = options.default_query.clone();

    if let Some(query) = request.and_then(|r| r.query.as_ref()) {
        merged.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    if let Some(query) = call_site {
        merged.extend(query.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    merged
}
