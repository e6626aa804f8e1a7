//! Security policy tokens carried by bags.
//!
//! Policies are opaque here. Enforcement lives in a separate layer that
//! reads a bag's policy and decides whether to reject an operation before
//! invoking it; the containers themselves allow everything.

use serde::{Deserialize, Serialize};

/// The default, permissive policy token.
const PERMISSIVE: &str = "all the world's a stage";

/// An opaque security-policy token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy(String);

impl Policy {
    /// The permissive policy: everything is allowed.
    pub fn open() -> Self {
        Self(PERMISSIVE.to_string())
    }

    /// A policy with a caller-defined token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for the enforcement layer.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// Whether this is the permissive default.
    pub fn is_open(&self) -> bool {
        self.0 == PERMISSIVE
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::open()
    }
}
