#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Network-level failure: connection, DNS, TLS or timeout. Surfaced
    /// unchanged from the transport; status codes are never turned into
    /// this variant.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON. An empty body is a
    /// decode error, not a "no content" success.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
