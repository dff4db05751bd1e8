use std::env;
use std::sync::Arc;

use lambda_runtime::{service_fn, Error};
use tracing::info;

use graphdir_shared::client::http::HttpGraphClient;

// Import the handlers module
mod handlers;
// Endpoint configuration
mod config;


#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    info!("Starting Directory Lister Lambda");

    let endpoint = config::users_endpoint();
    let client = Arc::new(HttpGraphClient::from_env());

    // Run the Lambda service function with the shared client
    lambda_runtime::run(service_fn(|event| {
        handlers::list_users(event, client.clone(), endpoint.clone())
    }))
    .await?;
    Ok(())
}
