//! Stateless async façade over an injected HTTP transport.
//!
//! # Design
//! `TodoClient` holds only the transport and the configured base URL; each
//! operation is an independent round-trip that builds an `HttpRequest`,
//! awaits the transport, and relays the outcome to the caller. Futures are
//! cold, so no request is issued until the caller awaits, and awaiting the
//! same operation twice issues two independent requests. There is no retry,
//! no caching, and no client-side validation.

use tracing::debug;

use crate::error::{ApiError, TransportFailure};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::types::Todo;

/// Async client for the todo API, generic over the injected transport.
///
/// The base URL is the collection endpoint itself: `list` and `create` hit
/// it directly, `delete` appends `/{id}`.
#[derive(Debug, Clone)]
pub struct TodoClient<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> TodoClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET the full collection, in whatever order the server returns it.
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        debug!(url = %self.base_url, "listing todos");
        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Get,
                url: self.base_url.clone(),
                headers: Vec::new(),
                body: None,
            })
            .await?;
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// POST a todo to the collection and return the server-confirmed value,
    /// which may differ from the input (the server assigns the `id`).
    ///
    /// The payload is sent as given; no client-side validation is performed.
    pub async fn create(&self, todo: &Todo) -> Result<Todo, ApiError> {
        debug!(url = %self.base_url, title = %todo.title, "creating todo");
        let body =
            serde_json::to_string(todo).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Post,
                url: self.base_url.clone(),
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: Some(body),
            })
            .await?;
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// DELETE `{base_url}/{id}`. Resolves with no payload on success.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.base_url);
        debug!(%url, "deleting todo");
        let response = self
            .transport
            .send(HttpRequest {
                method: HttpMethod::Delete,
                url,
                headers: Vec::new(),
                body: None,
            })
            .await?;
        check_success(&response)?;
        Ok(())
    }
}

/// Forward any non-2xx response to the caller as a `TransportFailure`,
/// status and reason intact.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Transport(TransportFailure {
        status: response.status,
        reason: response.reason.clone(),
    }))
}
