use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

// Helper function to map request-level reqwest failures (DNS, connect,
// timeout, body read) onto the transport variant
pub fn map_transport_error(operation: &str, err: reqwest::Error) -> ServiceError {
    ServiceError::Transport(format!("HTTP {} error: {}", operation, err))
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(format!("HTTP request error: {}", err))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::MalformedResponse(format!("JSON decode error: {}", err))
    }
}
