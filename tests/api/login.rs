use crate::helpers::{response_json, TestApp};

#[tokio::test]
async fn should_return_200_and_token_for_valid_credentials() {
    let app = TestApp::new().await;

    let response = app.login("admin", "password123").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response_json(response).await;
    let token = body["token"].as_str().expect("no token field");
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;

    let response = app.login("admin", "wrong-password").await;
    assert_eq!(response.status().as_u16(), 401);

    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Bad Credentials" }));
}

#[tokio::test]
async fn should_return_401_for_unknown_user() {
    let app = TestApp::new().await;

    let response = app.login("mallory", "password123").await;
    assert_eq!(response.status().as_u16(), 401);

    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Bad Credentials" }));
}

#[tokio::test]
async fn login_should_not_require_a_token() {
    let app = TestApp::new().await;

    // /login is outside the protected prefixes; no Authorization header needed.
    let response = app.login("admin", "password123").await;
    assert_eq!(response.status().as_u16(), 200);
}
