use std::collections::BTreeMap;

use crate::error::Error;

/// Query string parameters.
///
/// A `BTreeMap` so the encoded query string is deterministic: merged
/// parameters are written in alphabetical key order.
pub type Query = BTreeMap<String, String>;

/// A request body as a key-value map, serialized to JSON by [`json_body`].
pub type Data = serde_json::Map<String, serde_json::Value>;

/// Serialize a body map to JSON bytes, suitable as the `body` argument of
/// the mutating verbs.
///
/// ```no_run
/// # fn main() -> Result<(), httpc::Error> {
/// let mut data = httpc::Data::new();
/// data.insert("foo".to_string(), "bar".into());
///
/// let body = httpc::json_body(&data)?;
/// assert_eq!(body, br#"{"foo":"bar"}"#);
/// # Ok(())
/// # }
/// ```
pub fn json_body(data: &Data) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(data).map_err(Error::from)
}
