/// Token encoding and validation.
///
/// The codec turns a `ClaimSet` into a signed, self-contained token string
/// and validates such strings back into claims. Tokens are three base64url
/// segments (header, payload, signature) joined by `.`, signed with
/// HMAC-SHA256 over `header_b64 || "." || payload_b64`.
///
/// Security model:
/// 1. Verification order is fixed: structure, then signature, then expiry.
///    Payload contents are never interpreted before the signature matches.
/// 2. The header's algorithm field never selects the verification function.
///    The codec always applies its own configured MAC, so algorithm
///    confusion is structurally impossible; a header declaring anything
///    other than HS256/JWT is rejected as malformed.
/// 3. Signature comparison is constant-time.
///
/// Concurrency:
/// - The codec holds only the keyed MAC state, built once. Encode and decode
///   are pure bounded-time computations, safely shared across requests
///   behind an `Arc` with no locking.
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64_URL;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::{ClaimSet, ClaimValue, EXPIRY_CLAIM};

type HmacSha256 = Hmac<Sha256>;

pub const TOKEN_ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

impl Header {
    fn expected() -> Self {
        Header {
            alg: TOKEN_ALGORITHM.to_owned(),
            typ: TOKEN_TYPE.to_owned(),
        }
    }

    fn is_expected(&self) -> bool {
        self.alg == TOKEN_ALGORITHM && self.typ == TOKEN_TYPE
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to serialize claims: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("token structure is invalid")]
    Malformed,

    #[error("token signature does not match")]
    Signature,

    #[error("token is expired")]
    Expired,

    #[error("token carries no expiry claim")]
    MissingExpiry,
}

/// Stateless codec over a fixed secret. Clone-free sharing via `Arc`; the
/// secret never leaves the keyed MAC state and is never logged.
pub struct TokenCodec {
    mac: HmacSha256,
}

impl TokenCodec {
    /// Build a codec over the given signing secret.
    ///
    /// Panics: never in practice; HMAC-SHA256 accepts keys of any length.
    pub fn new(secret: &[u8]) -> Self {
        let mac = HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts any key length");
        TokenCodec { mac }
    }

    /// Sign `claims` into a token valid for `ttl` from now.
    ///
    /// The expiry claim is overwritten unconditionally; the TTL passed here
    /// is authoritative over anything the caller put in `claims`.
    pub fn encode(&self, mut claims: ClaimSet, ttl: Duration) -> Result<String, EncodeError> {
        let expires_at = (Utc::now() + ttl).timestamp();
        claims.insert(EXPIRY_CLAIM, expires_at);

        let header = serde_json::to_vec(&Header::expected())?;
        let payload = serde_json::to_vec(&claims)?;

        let signing_input = format!("{}.{}", B64_URL.encode(header), B64_URL.encode(payload));
        let signature = self.sign(signing_input.as_bytes());

        Ok(format!("{}.{}", signing_input, B64_URL.encode(signature)))
    }

    /// Validate `token` and return its claims.
    ///
    /// Checks run in a fixed order: structure, signature, expiry. A forged
    /// but well-formed token fails on the signature before its expiry is
    /// even looked at.
    pub fn decode(&self, token: &str) -> Result<ClaimSet, DecodeError> {
        let mut segments = token.split('.');
        let (header_b64, payload_b64, signature_b64) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(h), Some(p), Some(s), None) => (h, p, s),
                _ => return Err(DecodeError::Malformed),
            };
        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(DecodeError::Malformed);
        }

        let header_bytes = B64_URL
            .decode(header_b64)
            .map_err(|_| DecodeError::Malformed)?;
        let payload_bytes = B64_URL
            .decode(payload_b64)
            .map_err(|_| DecodeError::Malformed)?;
        let signature = B64_URL
            .decode(signature_b64)
            .map_err(|_| DecodeError::Malformed)?;

        let header: Header =
            serde_json::from_slice(&header_bytes).map_err(|_| DecodeError::Malformed)?;
        if !header.is_expected() {
            return Err(DecodeError::Malformed);
        }

        // Always our own MAC over the received segments; the header never
        // picks the verifier.
        let expected = self.sign(format!("{header_b64}.{payload_b64}").as_bytes());
        if expected.as_slice().ct_eq(signature.as_slice()).unwrap_u8() != 1 {
            return Err(DecodeError::Signature);
        }

        // Signature matched, so the payload is trustworthy and may be parsed.
        let claims: ClaimSet =
            serde_json::from_slice(&payload_bytes).map_err(|_| DecodeError::Malformed)?;

        match claims.get(EXPIRY_CLAIM) {
            None => Err(DecodeError::MissingExpiry),
            Some(ClaimValue::Int(expires_at)) => {
                if *expires_at > Utc::now().timestamp() {
                    Ok(claims)
                } else {
                    Err(DecodeError::Expired)
                }
            }
            Some(_) => Err(DecodeError::Malformed),
        }
    }

    fn sign(&self, input: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(input);
        mac.finalize().into_bytes().to_vec()
    }
}
