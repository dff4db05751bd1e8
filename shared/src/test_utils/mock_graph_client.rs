use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ApiResponse, GraphClient};
use crate::error::{Result, ServiceError};

/// MockGraphClient is a scripted in-memory transport for testing.
///
/// Responses are served in the order they were queued, and every requested
/// URL is recorded so tests can assert on the outbound traffic.
pub struct MockGraphClient {
    responses: Mutex<VecDeque<Result<ApiResponse>>>,
    requests: Mutex<Vec<String>>,
}

impl MockGraphClient {
    /// Create a new MockGraphClient with an empty script
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a MockGraphClient that serves a single canned reply
    pub fn with_response(status: u16, body: &str) -> Self {
        let client = Self::new();
        client.push_response(status, body);
        client
    }

    /// Queue a reply with the given status and body text
    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
    }

    /// Queue a failure; the next request will return this error instead of
    /// a reply
    pub fn push_error(&self, error: ServiceError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// URLs requested so far, oldest first
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests served (or failed) so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockGraphClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphClient for MockGraphClient {
    async fn get(&self, url: &str) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ServiceError::Transport(format!(
                "no scripted response left for {}",
                url
            )))
        })
    }
}
