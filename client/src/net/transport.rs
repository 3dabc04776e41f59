//! One-request HTTP transport.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpTransport` reports a transport
//! failure, since these endpoints are only meaningful in the browser. Tests
//! substitute their own `Transport`.
//!
//! DESIGN
//! ======
//! The transport knows nothing about auth or envelopes. It returns status +
//! raw body for any completed exchange, and `TransportError` only when no
//! response was received. Classification happens in `api`/`auth`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// A fully-resolved request: absolute or same-origin URL plus optional
/// query, JSON body, and bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), query: Vec::new(), body: None, bearer: None }
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// A completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// The `message` field of a JSON body, if any.
    pub fn message(&self) -> Option<String> {
        let body: Value = serde_json::from_str(&self.body).ok()?;
        body.get("message")?.as_str().map(str::to_owned)
    }
}

/// No response was received (offline, DNS, CORS, aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("network error: {0}")]
pub struct TransportError(pub String);

pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as HttpMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => HttpMethod::GET,
                Method::Post => HttpMethod::POST,
                Method::Patch => HttpMethod::PATCH,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            if !request.query.is_empty() {
                builder = builder
                    .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
