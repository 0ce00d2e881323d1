use crate::error::Result;
use reqwest::{header::HeaderMap, Method};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// Additional data to be sent along with the request.
pub enum RequestData<T> {
    /// No additional data.
    Empty,
    /// JSON data.
    Json(T),
    /// Query data. Every field becomes a query parameter, sequences become
    /// repeated parameters and `null` fields are left out.
    Query(T),
}

impl<T> Default for RequestData<T> {
    fn default() -> Self {
        RequestData::Empty
    }
}

/// The base-trait for requests sent by the client. The trait specifies the full life-cycle of the
/// request, including the endpoint, headers, data, method and eventual response.
pub trait Request {
    /// The type of additional data sent with the request. Usually, this will be `()` or `Self`.
    type Data: Serialize;
    /// The type of the response from the server.
    type Response: for<'de> Deserialize<'de> + Unpin;
    /// The HTTP method for the request.
    const METHOD: Method = Method::GET;

    /// The endpoint to which the request will be sent. The base url is set in the client, and the
    /// endpoint method returns the specific resource endpoint.
    fn endpoint(&self) -> Cow<str>;

    /// Any additional headers that should be sent with the request. Note that common headers such
    /// as authorization headers should be set on the client directly.
    fn headers(&self) -> HeaderMap {
        Default::default()
    }

    /// The formatted request data.
    fn data(&self) -> RequestData<&Self::Data> {
        Default::default()
    }

    /// Check required parameters. Runs before any attempt is made, a failure here is never
    /// retried.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Whether the request changes server-side state. Mutating requests carry a retry token so
    /// that repeated attempts are deduplicated by the server.
    fn is_mutating(&self) -> bool {
        Self::METHOD != Method::GET && Self::METHOD != Method::HEAD
    }
}

/// Returns `Err(MissingParameter)` if `value` is empty or only whitespace.
pub fn require(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(crate::Error::MissingParameter(name))
    } else {
        Ok(())
    }
}

#[derive(Debug)]
/// Struct symbolizing an empty response from the server.
pub struct EmptyResponse;
impl<'de> Deserialize<'de> for EmptyResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<EmptyResponse, D::Error>
    where
        D: Deserializer<'de>,
    {
        IgnoredAny::deserialize(deserializer)?;
        Ok(EmptyResponse)
    }
}
