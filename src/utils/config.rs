use std::env;

use chrono::Duration;
use dotenvy::dotenv;
use thiserror::Error;

// 72 hours
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 259_200;
const DEFAULT_PROTECTED_PREFIXES: &str = "/balance";

pub mod env_vars {
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const TOKEN_TTL_SECONDS: &str = "TOKEN_TTL_SECONDS";
    pub const PROTECTED_ROUTE_PREFIXES: &str = "PROTECTED_ROUTE_PREFIXES";
}

/// Immutable process-wide configuration, loaded once at startup.
///
/// The signing secret lives only here and inside the codec's keyed MAC; it
/// is deliberately kept out of `Debug` output and logs.
#[derive(Clone)]
pub struct Config {
    signing_secret: Vec<u8>,
    token_ttl_seconds: i64,
    protected_prefixes: Vec<String>,
}

impl Config {
    pub fn new(
        signing_secret: impl Into<Vec<u8>>,
        token_ttl_seconds: i64,
        protected_prefixes: Vec<String>,
    ) -> Self {
        Config {
            signing_secret: signing_secret.into(),
            token_ttl_seconds,
            protected_prefixes,
        }
    }

    pub fn signing_secret(&self) -> &[u8] {
        &self.signing_secret
    }

    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_seconds)
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected_prefixes
    }

    /// Route classification is declared here, not inferred from the order
    /// routes were registered in.
    pub fn is_protected_route(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let signing_secret = req_var(env_vars::JWT_SECRET)?;
        if signing_secret.is_empty() {
            return Err(ConfigError::Invalid(env_vars::JWT_SECRET));
        }

        let token_ttl_seconds = match opt_var(env_vars::TOKEN_TTL_SECONDS) {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::Invalid(env_vars::TOKEN_TTL_SECONDS))?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let raw_prefixes = opt_var(env_vars::PROTECTED_ROUTE_PREFIXES)
            .unwrap_or_else(|| DEFAULT_PROTECTED_PREFIXES.to_owned());
        let protected_prefixes: Vec<String> = raw_prefixes
            .split(',')
            .map(|prefix| prefix.trim().to_owned())
            .filter(|prefix| !prefix.is_empty())
            .collect();
        if protected_prefixes.is_empty() {
            return Err(ConfigError::Invalid(env_vars::PROTECTED_ROUTE_PREFIXES));
        }

        Ok(Config::new(
            signing_secret.into_bytes(),
            token_ttl_seconds,
            protected_prefixes,
        ))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
