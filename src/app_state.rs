use std::sync::Arc;

use crate::services::{Issuer, TokenCodec};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type IssuerType = Arc<Issuer>;
pub type TokenCodecType = Arc<TokenCodec>;
pub type ConfigType = Arc<Config>;

/// Shared collaborators for request handlers.
///
/// Everything here is read-only after startup, so plain `Arc`s are enough;
/// concurrent requests share the codec and config without locking.
#[derive(Clone)]
pub struct AppState {
    pub issuer: IssuerType,
    pub token_codec: TokenCodecType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(issuer: IssuerType, token_codec: TokenCodecType, config: ConfigType) -> Self {
        Self {
            issuer,
            token_codec,
            config,
        }
    }
}
