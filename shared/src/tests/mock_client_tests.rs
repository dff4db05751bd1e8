use std::sync::Arc;

use crate::client::GraphClient;
use crate::error::ServiceError;
use crate::test_utils::mock_graph_client::MockGraphClient;
use crate::test_utils::test_logging;

const TEST_URL: &str = "https://graph.example.com/v1.0/users";

#[tokio::test]
async fn test_mock_serves_responses_in_order() {
    test_logging::init_test_logging();

    let client = Arc::new(MockGraphClient::new());
    client.push_response(200, "first");
    client.push_response(404, "second");

    let first = client.get(TEST_URL).await.unwrap();
    assert_eq!(first.status, 200);
    assert_eq!(first.body, "first");
    assert!(first.is_success());

    let second = client.get(TEST_URL).await.unwrap();
    assert_eq!(second.status, 404);
    assert_eq!(second.body, "second");
    assert!(!second.is_success());
}

#[tokio::test]
async fn test_mock_records_requested_urls() {
    test_logging::init_test_logging();

    let client = MockGraphClient::with_response(200, "{}");
    client.push_response(200, "{}");

    client.get(TEST_URL).await.unwrap();
    client.get("https://graph.example.com/v1.0/users?$top=5").await.unwrap();

    assert_eq!(client.request_count(), 2);
    assert_eq!(
        client.requests(),
        vec![
            TEST_URL.to_string(),
            "https://graph.example.com/v1.0/users?$top=5".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_mock_exhausted_script_is_a_transport_error() {
    test_logging::init_test_logging();

    let client = MockGraphClient::new();

    let result = client.get(TEST_URL).await;
    assert!(matches!(result, Err(ServiceError::Transport(_))));
    // The failed request is still recorded
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_mock_scripted_error_is_returned() {
    test_logging::init_test_logging();

    let client = MockGraphClient::new();
    client.push_error(ServiceError::Transport("connection refused".to_string()));

    let err = client.get(TEST_URL).await.unwrap_err();
    assert!(err.to_string().contains("connection refused"));
}
