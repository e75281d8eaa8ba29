//! HTTP transport abstraction and plain-data request/response types.
//!
//! # Design
//! `TodoClient` never talks to the network directly. It builds `HttpRequest`
//! values and hands them to an injected [`HttpTransport`], which resolves to
//! an `HttpResponse` (or a [`TransportFailure`] when no response exists at
//! all, e.g. connection refused). Non-2xx statuses are returned as *data* —
//! interpreting them is the client's job, which keeps transports dumb and
//! interchangeable: `ReqwestTransport` in production, `MockTransport` in
//! tests.
//!
//! All fields use owned types (`String`, `Vec`) so values can be recorded
//! and replayed by test harnesses without lifetime concerns.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportFailure;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient` and executed by whatever [`HttpTransport`] was
/// injected into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// `reason` carries the status text ("OK", "Bad Request", ...). Responses
/// with non-2xx statuses are still `Ok` at the transport level; the client
/// converts them into failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// The injected "send request, get async result" seam.
///
/// The `Err` channel is reserved for failures where no HTTP exchange
/// happened (DNS, refused connection); those carry status 0. Implementations
/// must not retry — the client promises exactly one request per operation
/// invocation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// Lets callers inject a shared transport while keeping their own handle to
/// it, which is how the mock harness inspects recorded requests.
#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        (**self).send(request).await
    }
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportFailure::no_response(e.to_string()))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure::no_response(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
