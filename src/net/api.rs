//! REST API gateway.
//!
//! Requests are prepared synchronously from the current [`Session`] (URL,
//! `domain` header, bearer token) and then sent. Sending is real HTTP via
//! `gloo-net` in the hydrate build; elsewhere it returns
//! [`ApiFailure::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiFailure`]; callers hand it to
//! `net::error::resolve_failure` to get the session policy applied.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use super::error::ApiFailure;
use crate::config::ApiConfig;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, headers: Vec::new() }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure::InvalidRequest`] if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiFailure> {
        let value = serde_json::to_value(body).map_err(|e| ApiFailure::InvalidRequest(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A request ready for the wire: absolute URL and final header set.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    /// Host the console is served from; the API resolves the tenant by it.
    domain: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig, domain: impl Into<String>) -> Self {
        Self { config, domain: domain.into() }
    }

    /// Client for the current browser host (empty domain outside the browser).
    pub fn for_browser(config: ApiConfig) -> Self {
        #[cfg(feature = "hydrate")]
        let domain = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_default();
        #[cfg(not(feature = "hydrate"))]
        let domain = String::new();
        Self::new(config, domain)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve URL and headers for `request` as issued by `session`.
    ///
    /// The bearer token is attached only while the session is logged in.
    pub fn prepare(&self, request: ApiRequest, session: &Session) -> PreparedRequest {
        let mut url = self.config.url(&request.path);
        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{url}?{query}");
        }

        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if !self.domain.is_empty() {
            headers.push(("domain".to_owned(), self.domain.clone()));
        }
        if session.is_logged_in() {
            headers.push(("Authorization".to_owned(), format!("Bearer {}", session.token)));
        }
        headers.extend(request.headers);

        PreparedRequest { method: request.method, url, headers, body: request.body }
    }

    /// Send a prepared request and return the decoded JSON payload.
    ///
    /// Empty success bodies decode to `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] on transport failure, timeout, non-2xx status
    /// or an undecodable body.
    pub async fn send(&self, request: PreparedRequest) -> Result<Value, ApiFailure> {
        #[cfg(feature = "hydrate")]
        {
            use futures::future::{Either, select};
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Patch => Request::patch(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiFailure::InvalidRequest(e.to_string()))?;

            let response = Box::pin(outgoing.send());
            let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.config.timeout_ms));
            let resp = match select(response, timeout).await {
                Either::Left((result, _)) => result.map_err(|e| {
                    log::warn!("{} {} failed: {e}", request.method.as_str(), request.url);
                    ApiFailure::NoConnection
                })?,
                Either::Right(_) => return Err(ApiFailure::Timeout),
            };

            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiFailure::InvalidResponse(e.to_string()))?;
            let body = decode_body(&text);
            if !resp.ok() {
                return Err(ApiFailure::from_response(status, body.unwrap_or(Value::Null)));
            }
            body.map_err(|e| ApiFailure::InvalidResponse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiFailure::Unavailable)
        }
    }

    /// Prepare and send in one step.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn call(&self, request: ApiRequest, session: &Session) -> Result<Value, ApiFailure> {
        let prepared = self.prepare(request, session);
        self.send(prepared).await
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
}
