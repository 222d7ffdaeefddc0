use super::claims::{ClaimSet, ClaimValue, EXPIRY_CLAIM};

/// Identity established by a successfully validated token.
///
/// Holds the token's application claims with the reserved expiry claim
/// stripped out. Attached to a single request's extensions by the access
/// guard and dropped with the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    claims: ClaimSet,
}

impl AuthenticatedIdentity {
    pub fn from_claims(mut claims: ClaimSet) -> Self {
        claims.remove(EXPIRY_CLAIM);
        AuthenticatedIdentity { claims }
    }

    pub fn claim(&self, name: &str) -> Option<&ClaimValue> {
        self.claims.get(name)
    }

    /// The "name" claim, when present as a string.
    pub fn display_name(&self) -> Option<&str> {
        match self.claims.get("name") {
            Some(ClaimValue::String(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }
}
