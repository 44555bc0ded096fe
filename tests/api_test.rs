use httpmock::prelude::*;
use odyssey_project::{ApiClient, ApiConfig, ApiError};
use serde_json::json;

fn test_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        origin: "https://example.test".to_string(),
        referer: "https://example.test/".to_string(),
        user_agent: "test-agent".to_string(),
        referral_code: "REF123".to_string(),
    }
}

#[tokio::test]
async fn test_login_posts_body_and_returns_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/account/login")
                .header("content-type", "application/json")
                .header("origin", "https://example.test")
                .header("user-agent", "test-agent")
                .json_body(json!({
                    "address": "0xabc",
                    "referralCode": "REF123",
                    "initData": "query-token",
                }));
            then.status(200).json_body(json!({"token": "jwt", "isNewAccount": true}));
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let response = client.login("0xabc", "query-token", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.token.as_deref(), Some("jwt"));
}

#[tokio::test]
async fn test_login_referral_override() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/account/login").json_body(json!({
                "address": "0xabc",
                "referralCode": "CUSTOM",
                "initData": "query-token",
            }));
            then.status(200).json_body(json!({"token": "jwt"}));
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    client
        .login("0xabc", "query-token", Some("CUSTOM"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_without_token_field() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/login");
            then.status(200).json_body(json!({"message": "pending"}));
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let response = client.login("0xabc", "query-token", None).await.unwrap();

    assert!(response.token.is_none());
}

#[tokio::test]
async fn test_task_history_sends_bearer_and_parses_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/task/history")
                .header("authorization", "Bearer jwt");
            then.status(200).json_body(json!([
                {"id": 1, "name": "follow", "status": null},
                {"id": 2, "name": "retweet", "status": "completed"},
                {"id": 3, "name": "join"},
            ]));
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let tasks = client.task_history("jwt").await.unwrap();

    mock.assert_async().await;
    assert_eq!(tasks.len(), 3);
    assert!(tasks[0].is_incomplete());
    assert!(!tasks[1].is_incomplete());
    // Missing status counts the same as null
    assert!(tasks[2].is_incomplete());
}

#[tokio::test]
async fn test_submit_task_body_and_auth() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/task/submit")
                .header("authorization", "Bearer jwt")
                .json_body(json!({"taskId": 7, "extrinsicHash": "", "network": ""}));
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let result = client.submit_task("jwt", 7).await.unwrap();

    mock.assert_async().await;
    assert!(result.success);
}

#[tokio::test]
async fn test_non_2xx_maps_to_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/task/history");
            then.status(401).body("unauthorized");
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let err = client.task_history("stale").await.unwrap_err();

    match err {
        ApiError::Status { op, status } => {
            assert_eq!(op, "task history");
            assert_eq!(status, 401);
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/account/login");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let client = ApiClient::new(test_config(server.base_url())).unwrap();
    let err = client.login("0xabc", "query-token", None).await.unwrap_err();

    match err {
        ApiError::InvalidResponse { op, .. } => assert_eq!(op, "login"),
        other => panic!("Expected InvalidResponse error, got {:?}", other),
    }
}
