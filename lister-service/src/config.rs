use std::env;

/// Endpoint used when no override is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://graph.microsoft.com/v1.0/users";

const USERS_ENDPOINT_VAR: &str = "GRAPH_USERS_ENDPOINT";

/// Resolves the directory-listing endpoint, preferring the environment over
/// the built-in default. Resolved once at startup, not per invocation.
pub fn users_endpoint() -> String {
    env::var(USERS_ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_USERS_ENDPOINT.to_string())
}
