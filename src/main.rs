use std::sync::Arc;

use auth_gate::app_state::AppState;
use auth_gate::domain::CredentialVerifier;
use auth_gate::services::{Issuer, MockCredentialVerifier, TokenCodec};
use auth_gate::utils::Config;
use auth_gate::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let token_codec = Arc::new(TokenCodec::new(config.signing_secret()));
    let credential_verifier: Arc<dyn CredentialVerifier> =
        Arc::new(MockCredentialVerifier::default());
    let issuer = Arc::new(Issuer::new(
        credential_verifier,
        token_codec.clone(),
        config.token_ttl(),
    ));

    let app_state = AppState::new(issuer, token_codec, config);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
