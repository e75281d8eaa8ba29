//! In-process transport harness for unit tests.
//!
//! # Design
//! `MockTransport` plays the server's role without any network: tests
//! script a FIFO queue of outcomes, the client runs against it, and the
//! test then inspects the recorded requests. `verify` asserts the script
//! was fully consumed, so a test cannot silently leave a scripted exchange
//! unexercised.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportFailure;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Default)]
struct State {
    outcomes: VecDeque<Result<HttpResponse, TransportFailure>>,
    requests: Vec<HttpRequest>,
}

/// Scripted transport that records every request it receives.
#[derive(Debug, Default)]
pub struct MockTransport {
    state: Mutex<State>,
}

impl MockTransport {
    /// Returns an `Arc` so the test keeps a handle while the client owns a
    /// clone of it.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script the next outcome as a response (any status, including non-2xx).
    pub fn enqueue(&self, response: HttpResponse) {
        self.state.lock().unwrap().outcomes.push_back(Ok(response));
    }

    /// Script the next outcome as a transport-level failure (no response).
    pub fn enqueue_failure(&self, failure: TransportFailure) {
        self.state.lock().unwrap().outcomes.push_back(Err(failure));
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Panics if any scripted outcome was never consumed.
    pub fn verify(&self) {
        let remaining = self.state.lock().unwrap().outcomes.len();
        assert_eq!(remaining, 0, "{remaining} scripted outcome(s) not consumed");
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .outcomes
            .pop_front()
            .unwrap_or_else(|| Err(TransportFailure::no_response("no scripted outcome")))
    }
}
