//! Session token handling
//!
//! Tokens are stateless HS256 JWTs carrying the user id and an absolute
//! expiry. Nothing is persisted server-side; logout works through the
//! [`crate::auth::RevocationRegistry`] instead.

use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, expiring `ttl_hours` from now
    pub fn new(user_id: i64, ttl_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user_id,
            iat: now,
            exp: now + ttl_hours * 3600,
        }
    }

    /// Check if the embedded expiry has passed
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Sign a set of claims into a compact token string
pub fn sign_claims(claims: &Claims, secret: &[u8]) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| Error::Other(format!("Failed to sign token: {}", e)))
}

/// Issue a fresh session token for a user
pub fn issue_token(user_id: i64, secret: &[u8], ttl_hours: i64) -> Result<String> {
    sign_claims(&Claims::new(user_id, ttl_hours), secret)
}

/// Verify a token's signature and expiry, returning its claims
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => Error::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn test_issue_and_validate_token() {
        let token = issue_token(42, SECRET, 10).expect("Failed to issue token");
        let claims = validate_token(&token, SECRET).expect("Failed to validate token");

        assert_eq!(claims.sub, 42);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp, claims.iat + 10 * 3600);
    }

    #[test]
    fn test_invalid_token() {
        let result = validate_token("invalid.token.here", SECRET);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue_token(1, SECRET, 10).expect("Failed to issue token");
        let result = validate_token(&token, b"some-other-secret");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 7,
            iat: now - 11 * 3600,
            exp: now - 3600,
        };
        let token = sign_claims(&claims, SECRET).expect("Failed to sign claims");
        let result = validate_token(&token, SECRET);
        assert!(matches!(result, Err(Error::ExpiredToken)));
    }
}
