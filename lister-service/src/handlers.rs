use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use graphdir_shared::client::GraphClient;
use graphdir_shared::error::ServiceError;
use graphdir_shared::models::{DirectoryPage, DirectoryUser};

// Marker logged in place of a field the directory did not send. Distinct
// from an empty string, which would be a field the directory DID send.
const MISSING_FIELD: &str = "None";

/// Lambda handler. Issues one directory-listing request, reports the page to
/// the log, and returns the raw response body as the invocation result.
///
/// The event payload is opaque trigger metadata and is never inspected.
/// Transport failures and a malformed body on a success status propagate as
/// invocation errors; a non-success status is logged and still returns the
/// body.
pub async fn list_users<C>(
    _event: LambdaEvent<Value>,
    client: Arc<C>,
    endpoint: String,
) -> Result<String, Error>
where
    C: GraphClient,
{
    let response = client.get(&endpoint).await?;

    if response.is_success() {
        let page: DirectoryPage =
            serde_json::from_str(&response.body).map_err(ServiceError::from)?;

        for line in page_report(&page) {
            info!("{}", line);
        }
    } else {
        error!("Failed to retrieve users from Microsoft Graph.");
        error!("HTTP Status Code: {}", response.status);
        error!("Response: {}", response.body);
    }

    // Both branches surface the raw body to the platform
    Ok(response.body)
}

/// Builds the log lines for one page of results: a header, one line per user
/// record in order, and a trailing notice when the server reports that more
/// pages exist. Pure so tests can assert on the exact output.
pub fn page_report(page: &DirectoryPage) -> Vec<String> {
    let mut lines = Vec::with_capacity(page.value.len() + 2);
    lines.push("Listing all users in Azure AD:".to_string());

    for user in &page.value {
        lines.push(user_line(user));
    }

    if page.has_next_page() {
        lines.push(
            "More pages of users exist. Handle nextLink for additional pages.".to_string(),
        );
    }

    lines
}

fn user_line(user: &DirectoryUser) -> String {
    format!(
        "User Principal Name: {}, Display Name: {}",
        user.user_principal_name.as_deref().unwrap_or(MISSING_FIELD),
        user.display_name.as_deref().unwrap_or(MISSING_FIELD),
    )
}
