//! Identity-token claim container.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The extensible claim set of an identity token.
///
/// This models only what the mapper needs from the host platform's token
/// object: a mutable, string-keyed claim map. Signing, expiry and the token's
/// registered claims are the host's concern and never appear here.
///
/// Writes go through [`Token::set_claim`], which replaces at most the named
/// entry; claims written by other mappers are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    other_claims: BTreeMap<String, Value>,
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single claim, merging with (not clobbering) the rest of the set.
    pub fn set_claim(&mut self, name: impl Into<String>, value: Value) {
        self.other_claims.insert(name.into(), value);
    }

    /// Read back a claim by name.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.other_claims.get(name)
    }

    /// The full claim set.
    pub fn claims(&self) -> &BTreeMap<String, Value> {
        &self.other_claims
    }
}
