use crate::helpers::{response_json, TestApp};

fn unauthorized_body() -> serde_json::Value {
    serde_json::json!({ "error": "Unauthorized: Invalid or Missing Token" })
}

#[tokio::test]
async fn should_return_401_without_token() {
    let app = TestApp::new().await;

    let response = app.get_balance_without_auth().await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_401_for_wrong_scheme() {
    let app = TestApp::new().await;

    let response = app.get_balance_with_header("Basic dXNlcjpwYXNz").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_401_for_empty_bearer_value() {
    let app = TestApp::new().await;

    let response = app.get_balance_with_header("Bearer ").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_401_for_garbage_token() {
    let app = TestApp::new().await;

    let response = app.get_balance("not-a-real-token").await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_401_for_tampered_token() {
    let app = TestApp::new().await;
    let token = app.login_for_token().await;

    // Swap the payload for one the server never signed. The response must be
    // indistinguishable from the missing-token case.
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_payload = "eyJhZG1pbiI6dHJ1ZSwibmFtZSI6Ik1hbGxvcnkifQ";
    parts[1] = forged_payload;
    let tampered = parts.join(".");

    let response = app.get_balance(&tampered).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_401_for_expired_token() {
    // TTL of one second; wait it out before presenting the token.
    let app = TestApp::with_ttl_seconds(1).await;
    let token = app.login_for_token().await;

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let response = app.get_balance(&token).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response_json(response).await, unauthorized_body());
}

#[tokio::test]
async fn should_return_200_and_profile_for_valid_token() {
    let app = TestApp::new().await;
    let token = app.login_for_token().await;

    let response = app.get_balance(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(
        response_json(response).await,
        serde_json::json!({
            "user": "John Doe",
            "balance": "$1,000,000",
            "status": "Access Granted"
        })
    );
}
