use std::sync::Arc;

use chrono::Duration;

use crate::domain::{ClaimSet, CredentialError, CredentialVerifier};
use crate::errors::LoginError;
use crate::services::TokenCodec;

/// Orchestrates login: verify credentials, build claims, sign a token.
///
/// Stateless by design. No session record is created anywhere; the returned
/// token is the only artifact of a successful login and the client holds the
/// only copy.
pub struct Issuer {
    verifier: Arc<dyn CredentialVerifier>,
    codec: Arc<TokenCodec>,
    token_ttl: Duration,
}

impl Issuer {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        codec: Arc<TokenCodec>,
        token_ttl: Duration,
    ) -> Self {
        Issuer {
            verifier,
            codec,
            token_ttl,
        }
    }

    pub async fn login(&self, user: &str, pass: &str) -> Result<String, LoginError> {
        let profile = self.verifier.verify(user, pass).await.map_err(|e| match e {
            CredentialError::BadCredentials => LoginError::BadCredentials,
            CredentialError::UnexpectedError => LoginError::InternalServerError,
        })?;

        let mut claims = ClaimSet::new();
        claims.insert("name", profile.display_name);
        claims.insert("admin", profile.admin);

        self.codec.encode(claims, self.token_ttl).map_err(|e| {
            log::error!("token encoding failed: {e}");
            LoginError::InternalServerError
        })
    }
}
