use super::user::UserProfile;

#[derive(Debug, PartialEq)]
pub enum CredentialError {
    BadCredentials,
    UnexpectedError,
}

/// Checks a presented (identifier, secret) pair against a trust source.
///
/// The real backing store is an external collaborator; implementations may
/// block on I/O, so the trait is async.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, user: &str, pass: &str) -> Result<UserProfile, CredentialError>;
}
