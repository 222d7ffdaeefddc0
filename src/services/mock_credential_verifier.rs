use crate::domain::{CredentialError, CredentialVerifier, UserProfile};

/// Stand-in for a real credential store.
///
/// Accepts exactly one account; a production deployment would swap in a
/// verifier backed by SQL or an identity provider.
#[derive(Default)]
pub struct MockCredentialVerifier;

#[async_trait::async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, user: &str, pass: &str) -> Result<UserProfile, CredentialError> {
        if user == "admin" && pass == "password123" {
            return Ok(UserProfile::new("John Doe", true));
        }
        Err(CredentialError::BadCredentials)
    }
}
