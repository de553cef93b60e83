//! Token revocation registry
//!
//! Logout works by blacklisting the raw token string for the life of the
//! process. Entries are never swept, even after the token's own expiry has
//! passed, and nothing survives a restart.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide set of revoked token strings
pub struct RevocationRegistry {
    revoked: Arc<RwLock<HashSet<String>>>,
}

impl RevocationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            revoked: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Revoke a token; it will be rejected on every subsequent request
    pub async fn revoke(&self, token: String) {
        self.revoked.write().await.insert(token);
    }

    /// Check whether a token has been revoked
    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().await.contains(token)
    }

    /// Number of revoked tokens
    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    /// Whether no tokens have been revoked yet
    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }
}

impl Default for RevocationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RevocationRegistry {
    fn clone(&self) -> Self {
        Self {
            revoked: Arc::clone(&self.revoked),
        }
    }
}
