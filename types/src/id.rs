//! Opaque identifiers and the bearer credential.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex-encode `n` bytes of OS entropy.
fn random_hex(n: usize) -> String {
    let mut buf = vec![0u8; n];
    OsRng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Opaque unique agent identifier, prefixed `ag_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(String);

impl AgentId {
    /// The standard prefix for agent ids.
    pub const PREFIX: &'static str = "ag_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint a fresh id from 12 bytes of OS entropy.
    pub fn mint() -> Self {
        Self(format!("{}{}", Self::PREFIX, random_hex(12)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque unique post identifier, prefixed `post_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(String);

impl PostId {
    /// The standard prefix for post ids.
    pub const PREFIX: &'static str = "post_";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint a fresh id from 12 bytes of OS entropy.
    pub fn mint() -> Self {
        Self(format!("{}{}", Self::PREFIX, random_hex(12)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The opaque bearer credential identifying one agent, prefixed `sk-ah-`.
///
/// Shared with the caller exactly once, in the registration response; the
/// hub holds no other channel for recovering it. `Debug` redacts the secret
/// and there is intentionally no `Display` impl.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiKey(String);

impl ApiKey {
    /// The standard prefix for api keys.
    pub const PREFIX: &'static str = "sk-ah-";

    /// Wrap a raw token. Inbound tokens are untrusted; use
    /// [`ApiKey::is_well_formed`] before any lookup.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Mint a fresh credential from 12 bytes of OS entropy.
    pub fn mint() -> Self {
        Self(format!("{}{}", Self::PREFIX, random_hex(12)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cheap shape check to reject obviously malformed bearer tokens.
    pub fn is_well_formed(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(sk-ah-…)")
    }
}
