use async_trait::async_trait;

use crate::error::Result;

// Expose the reqwest-backed client module
pub mod http;

/// Raw reply from the directory API: the numeric status code and the
/// unparsed body text. Callers branch on the status and decide whether the
/// body is worth decoding.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// GraphClient trait defining the interface for directory API transports
#[async_trait]
pub trait GraphClient: Send + Sync + 'static {
    /// Performs a single GET against the given URL and returns the raw reply
    async fn get(&self, url: &str) -> Result<ApiResponse>;
}
