use opsi::backoff::FixedBackoff;
use opsi::{EmptyResponse, Method, Request, RequestData, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;

pub mod matchers;

/// A policy that retries `max_attempts` times with a short fixed delay.
pub fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts).with_backoff(FixedBackoff(Duration::from_millis(5)))
}

pub struct EmptyHello;

impl Request for EmptyHello {
    type Data = ();
    type Response = EmptyResponse;

    fn endpoint(&self) -> Cow<str> {
        "/hello".into()
    }
}

#[derive(Serialize)]
pub struct QueryHello {
    pub name: String,
}

#[derive(Serialize)]
pub struct JsonHello {
    pub name: String,
}

#[derive(Serialize)]
pub struct CreateHello {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct NameGreeting {
    pub message: String,
}

impl Request for QueryHello {
    type Data = Self;
    type Response = NameGreeting;

    fn endpoint(&self) -> Cow<str> {
        "/hello".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

impl Request for JsonHello {
    type Data = Self;
    type Response = NameGreeting;

    fn endpoint(&self) -> Cow<str> {
        "/hello".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}

impl Request for CreateHello {
    type Data = Self;
    type Response = NameGreeting;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<str> {
        "/hello".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}
