use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::options::RequestOptions;
use crate::pagination::{PaginatedRequest, State};
use crate::request::{Request, RequestData};
use crate::response::{decode, Response, OPC_REQUEST_ID, OPC_RETRY_TOKEN};
use crate::retry::RetryPolicy;
use crate::retry_loop::retry_loop;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use futures::prelude::*;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, IF_MATCH,
};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
enum Authorization {
    Bearer(String),
    Query(Vec<(String, String)>),
    Header(HeaderMap<HeaderValue>),
}

/// The main client used for making requests.
///
/// `Client` stores the transport used to reach the server, the client-wide
/// configuration and possible authorization details. Every call goes through
/// the retry loop with the policy resolved from the configuration and the
/// per-call [RequestOptions].
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
    auth: Option<Authorization>,
}

impl Client {
    /// Create a new `Client` for an endpoint, without retries.
    pub fn new<S: ToString>(endpoint: S) -> Self {
        Self::with_transport(ClientConfig::new(endpoint), ReqwestTransport::default())
    }

    /// Create a new `Client` from a configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout(), config.user_agent())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a new `Client` using a custom transport.
    pub fn with_transport<T: Transport + 'static>(config: ClientConfig, transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
            auth: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Point the client at a region, recomputing its endpoint.
    pub fn set_region<S: ToString>(&mut self, region: S) {
        self.config.set_region(region);
    }

    /// Replace the default retry policy. `None` disables retries for calls
    /// that do not set their own policy.
    pub fn set_retry_policy(&mut self, policy: Option<RetryPolicy>) {
        self.config.set_retry_policy(policy);
    }

    /// Enable bearer authentication for the client
    pub fn bearer_auth<S: ToString>(mut self, token: S) -> Self {
        self.auth = Some(Authorization::Bearer(token.to_string()));
        self
    }

    /// Enable query authentication for the client
    pub fn query_auth<S: ToString>(mut self, pairs: Vec<(S, S)>) -> Self {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.auth = Some(Authorization::Query(pairs));
        self
    }

    /// Enable custom header authentication for the client
    pub fn header_auth<S: ToString>(mut self, pairs: Vec<(S, S)>) -> Result<Self> {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            let k = k.to_string();
            let v = v.to_string();
            map.insert(header_name(&k)?, header_value(&k, &v)?);
        }
        self.auth = Some(Authorization::Header(map));
        Ok(self)
    }

    fn format_request<R: Request>(
        &self,
        request: &R,
        options: &RequestOptions,
    ) -> Result<HttpRequest> {
        let endpoint = request.endpoint();
        let endpoint = endpoint.trim_matches('/');
        let raw = format!("{}/{}", self.config.endpoint(), endpoint);
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl {
            url: raw.clone(),
            msg: e.to_string(),
        })?;

        let mut headers = request.headers();
        let body = match request.data() {
            RequestData::Empty => None,
            RequestData::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(to_json(&value)?)
            }
            RequestData::Query(value) => {
                append_query(&mut url, &value)?;
                None
            }
        };

        if request.is_mutating() {
            let token = options
                .retry_token()
                .map(str::to_string)
                .unwrap_or_else(new_retry_token);
            headers.insert(OPC_RETRY_TOKEN, header_value(OPC_RETRY_TOKEN, &token)?);
        }
        if let Some(request_id) = options.request_id() {
            headers.insert(OPC_REQUEST_ID, header_value(OPC_REQUEST_ID, request_id)?);
        }
        if let Some(etag) = options.if_match() {
            headers.insert(IF_MATCH, header_value(IF_MATCH.as_str(), etag)?);
        }

        match &self.auth {
            None => {}
            Some(Authorization::Bearer(token)) => {
                let value = format!("Bearer {}", token);
                headers.insert(AUTHORIZATION, header_value(AUTHORIZATION.as_str(), &value)?);
            }
            Some(Authorization::Query(pairs)) => {
                url.query_pairs_mut().extend_pairs(pairs.iter());
            }
            Some(Authorization::Header(pairs)) => {
                headers.extend(pairs.clone());
            }
        };

        log::debug!("Prepared {} {}", R::METHOD, url);
        Ok(HttpRequest {
            method: R::METHOD,
            url,
            headers,
            body,
        })
    }

    /// Run `request` through the retry loop. The same request, retry token
    /// included, is sent on every attempt.
    async fn send_raw<T>(
        &self,
        request: HttpRequest,
        options: &RequestOptions,
    ) -> Result<Response<T>>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let policy = options.retry().resolve(self.config.retry_policy());
        let request = &request;
        retry_loop(&policy, options.cancellation(), |attempt| {
            let req = request.clone();
            async move {
                let res = self.transport.execute(req).await?;
                decode(res, attempt)
            }
        })
        .await
    }

    /// Send a single `Request` with default options
    pub async fn send<R: Request>(&self, request: &R) -> Result<Response<R::Response>> {
        self.send_with(request, &RequestOptions::default()).await
    }

    /// Send a single `Request`
    pub async fn send_with<R: Request>(
        &self,
        request: &R,
        options: &RequestOptions,
    ) -> Result<Response<R::Response>> {
        request.validate()?;
        let req = self.format_request(request, options)?;
        self.send_raw(req, options).await
    }

    /// Send multiple `Request`s, returing a stream of results
    pub fn send_all<'a, I, R>(
        &'a self,
        requests: I,
    ) -> impl Stream<Item = Result<Response<R::Response>>> + Unpin + 'a
    where
        I: IntoIterator<Item = &'a R> + 'a,
        R: Request + 'a,
    {
        Box::pin(stream::iter(requests.into_iter()).then(move |r| self.send(r)))
    }

    /// Send a paginated request, returning a stream of pages. Pagination
    /// follows the `opc-next-page` header until the server stops sending it.
    pub fn send_paginated<'a, R: PaginatedRequest>(
        &'a self,
        request: &'a R,
        options: &'a RequestOptions,
    ) -> impl Stream<Item = Result<Response<R::Response>>> + Unpin + 'a {
        Box::pin(stream::try_unfold(
            State::Start(request.initial_page()),
            move |state| async move {
                let page = match state {
                    State::Start(page) => page,
                    State::Next(page) => Some(page),
                    State::End => return Ok::<_, Error>(None),
                };
                request.validate()?;
                let mut req = self.format_request(request, options)?;
                if let Some(page) = page.as_ref() {
                    set_query_param(&mut req.url, R::PAGE_PARAM, page);
                }
                let response: Response<R::Response> = self.send_raw(req, options).await?;
                let state = match response.next_page.clone() {
                    Some(next) => State::Next(next),
                    None => State::End,
                };
                Ok(Some((response, state)))
            },
        ))
    }
}

/// A fresh idempotency token for one logical call.
pub(crate) fn new_retry_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::try_from(name).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        msg: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        msg: e.to_string(),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|error| Error::Serde {
        error,
        msg: "failed to encode request body".into(),
    })
}

/// Appends every field of `value` to the query. `null` fields are skipped
/// and arrays become repeated keys.
fn append_query<T: Serialize>(url: &mut Url, value: &T) -> Result<()> {
    let value = serde_json::to_value(value).map_err(|error| Error::Serde {
        error,
        msg: "failed to encode query".into(),
    })?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(()),
        other => {
            return Err(Error::InvalidUrl {
                url: url.to_string(),
                msg: format!("query data must be an object, got {}", other),
            })
        }
    };
    let mut pairs = url.query_pairs_mut();
    for (key, value) in map.iter() {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.append_pair(key, &scalar(item));
                }
            }
            other => {
                pairs.append_pair(key, &scalar(other));
            }
        }
    }
    drop(pairs);
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(())
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replaces any existing values of `key` in the query.
fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.set_query(None);
    let mut pairs = url.query_pairs_mut();
    pairs.extend_pairs(kept.iter());
    pairs.append_pair(key, value);
}
