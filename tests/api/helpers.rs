use std::sync::Arc;

use reqwest::{Client, Response};
use tokio::net::TcpListener;
use tokio::spawn;

use auth_gate::app_router;
use auth_gate::app_state::AppState;
use auth_gate::domain::CredentialVerifier;
use auth_gate::services::{Issuer, MockCredentialVerifier, TokenCodec};
use auth_gate::utils::Config;

const TEST_SECRET: &[u8] = b"api-test-signing-secret-0123456789abcdef";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_ttl_seconds(3600).await
    }

    pub async fn with_ttl_seconds(ttl_seconds: i64) -> Self {
        let config = Arc::new(Config::new(
            TEST_SECRET.to_vec(),
            ttl_seconds,
            vec!["/balance".to_owned()],
        ));
        let token_codec = Arc::new(TokenCodec::new(config.signing_secret()));
        let credential_verifier: Arc<dyn CredentialVerifier> =
            Arc::new(MockCredentialVerifier::default());
        let issuer = Arc::new(Issuer::new(
            credential_verifier,
            token_codec.clone(),
            config.token_ttl(),
        ));
        let app_state = AppState::new(issuer, token_codec, config);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");

        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn login(&self, user: &str, pass: &str) -> Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&serde_json::json!({ "user": user, "pass": pass }))
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    /// Login with the mock account and return the issued token string.
    pub async fn login_for_token(&self) -> String {
        let response = self.login("admin", "password123").await;
        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.expect("login body was not JSON");
        body["token"]
            .as_str()
            .expect("login body had no token field")
            .to_owned()
    }

    pub async fn get_balance(&self, token: &str) -> Response {
        self.get_balance_with_header(&format!("Bearer {token}")).await
    }

    pub async fn get_balance_with_header(&self, authorization: &str) -> Response {
        self.http_client
            .get(format!("{}/balance", &self.address))
            .header("Authorization", authorization)
            .send()
            .await
            .expect("Failed to execute balance request.")
    }

    pub async fn get_balance_without_auth(&self) -> Response {
        self.http_client
            .get(format!("{}/balance", &self.address))
            .send()
            .await
            .expect("Failed to execute balance request.")
    }
}

pub async fn response_json(response: Response) -> serde_json::Value {
    response.json().await.expect("response body was not JSON")
}
