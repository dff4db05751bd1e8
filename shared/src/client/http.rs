use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::client::{ApiResponse, GraphClient};
use crate::error::{map_transport_error, Result};

// Optional bearer token for the directory API. Unset means requests go out
// unauthenticated, which is the default deployment shape.
const ACCESS_TOKEN_VAR: &str = "GRAPH_ACCESS_TOKEN";

/// reqwest-backed client used by the deployed Lambda
pub struct HttpGraphClient {
    client: Client,
    access_token: Option<String>,
}

impl HttpGraphClient {
    /// Creates a client that sends no authorization header
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            access_token: None,
        }
    }

    /// Creates a client configured from the environment; picks up
    /// GRAPH_ACCESS_TOKEN when it is set.
    pub fn from_env() -> Self {
        Self {
            client: Client::new(),
            access_token: env::var(ACCESS_TOKEN_VAR).ok(),
        }
    }

    /// Creates a client that authenticates with the given bearer token.
    /// Mainly useful when the token is sourced somewhere other than the
    /// process environment.
    #[allow(dead_code)]
    pub fn with_access_token(token: String) -> Self {
        Self {
            client: Client::new(),
            access_token: Some(token),
        }
    }
}

impl Default for HttpGraphClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphClient for HttpGraphClient {
    async fn get(&self, url: &str) -> Result<ApiResponse> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| map_transport_error("get", err))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| map_transport_error("read_body", err))?;

        Ok(ApiResponse { status, body })
    }
}
