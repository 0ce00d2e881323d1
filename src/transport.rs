//! The network boundary of the client.
//!
//! The client turns every [Request](crate::Request) into an [HttpRequest]
//! once per call and hands a copy of it to the [Transport] on each attempt.

use crate::error::{Error, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use std::time::Duration;

/// A fully built request: method, url including the query, headers and body.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// The raw response of a single attempt.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs one network exchange.
///
/// Implementations return `Ok` for any response received from the server,
/// whatever its status, and an error only when no response was received.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

/// The default transport, backed by an async reqwest client.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    inner: ReqwestClient,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            inner: builder.build()?,
        })
    }

    pub fn from_client(inner: ReqwestClient) -> Self {
        Self { inner }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        let mut req = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            req = req.body(body);
        }
        async move {
            let res = req.send().await?;
            let status = res.status();
            let headers = res.headers().clone();
            let body = res.bytes().await?.to_vec();
            Ok::<_, Error>(HttpResponse {
                status,
                headers,
                body,
            })
        }
        .boxed()
    }
}
