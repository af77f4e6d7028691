//! Scripted in-memory transport for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use ytbridge_core::{Error, Result};

use crate::transport::{HttpRequest, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response body.
    #[must_use]
    pub fn respond_json(self, body: &serde_json::Value) -> Self {
        self.respond_text(&body.to_string())
    }

    /// Queue a raw text response body.
    #[must_use]
    pub fn respond_text(self, body: &str) -> Self {
        self.responses.lock().push_back(Ok(body.as_bytes().to_vec()));
        self
    }

    /// Queue a failure.
    #[must_use]
    pub fn fail(self, error: Error) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    /// Requests executed so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Path of each request executed so far, e.g. `/youtubei/v1/next`.
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network("no scripted response left".to_string())))
    }
}
