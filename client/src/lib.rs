//! Async API client for the todo service.
//!
//! # Overview
//! A thin, stateless façade over an injected HTTP transport: `list`,
//! `create`, and `delete` translate into single GET/POST/DELETE round-trips
//! against one configured base URL, with the server's response (or failure)
//! relayed to the caller unchanged.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only the transport and `base_url`,
//!   both fixed at construction.
//! - The transport is a trait seam (`HttpTransport`), so production code
//!   runs on `ReqwestTransport` while tests run on the in-process
//!   `MockTransport` harness.
//! - Every non-success outcome is forwarded as a `TransportFailure` with
//!   status code and reason intact; the client never retries or interprets.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod testing;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, TransportFailure};
pub use testing::MockTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::Todo;
