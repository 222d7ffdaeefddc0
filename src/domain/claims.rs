use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved claim holding the absolute expiry as Unix-epoch seconds.
pub const EXPIRY_CLAIM: &str = "exp";

/// A single claim value. The codec round-trips these without interpreting
/// them; only the reserved expiry claim has meaning to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Int(value)
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_owned())
    }
}

/// Ordered claim-name -> value mapping carried in a token payload.
///
/// Backed by a `BTreeMap` so serialization is deterministic regardless of
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(BTreeMap<String, ClaimValue>);

impl ClaimSet {
    pub fn new() -> Self {
        ClaimSet(BTreeMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ClaimValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ClaimValue> {
        self.0.remove(name)
    }

    /// The reserved expiry claim, if present as an integer timestamp.
    pub fn expires_at(&self) -> Option<i64> {
        match self.get(EXPIRY_CLAIM) {
            Some(ClaimValue::Int(ts)) => Some(*ts),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClaimValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
