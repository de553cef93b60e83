//! Authentication and token lifecycle tests

use daybook::auth::{
    hash_password, issue_token, sign_claims, validate_token, Claims, RevocationRegistry,
};
use daybook::error::Error;

const SECRET: &[u8] = b"test-secret";

#[test]
fn test_token_has_jwt_format() {
    let token = issue_token(1, SECRET, 10).expect("Failed to issue token");
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3); // JWT format: header.payload.signature
}

#[test]
fn test_issue_and_validate_round_trip() {
    let token = issue_token(42, SECRET, 10).expect("Failed to issue token");
    let claims = validate_token(&token, SECRET).expect("Failed to validate token");

    assert_eq!(claims.sub, 42);
    assert!(!claims.is_expired());
}

#[test]
fn test_token_expiry_is_ten_hours_out() {
    let claims = Claims::new(7, 10);
    assert_eq!(claims.exp - claims.iat, 10 * 3600);
    assert!(claims.iat > 0);
}

#[test]
fn test_invalid_token_rejection() {
    let result = validate_token("invalid.token.here", SECRET);
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[test]
fn test_malformed_token_rejection() {
    let result = validate_token("not-a-jwt-token", SECRET);
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[test]
fn test_wrong_secret_rejection() {
    let token = issue_token(1, SECRET, 10).expect("Failed to issue token");
    let result = validate_token(&token, b"a-different-secret");
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[test]
fn test_tampered_token_rejection() {
    let token = issue_token(1, SECRET, 10).expect("Failed to issue token");
    let mut tampered = token.clone();
    let last = tampered.pop().expect("token is non-empty");
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let result = validate_token(&tampered, SECRET);
    assert!(matches!(result, Err(Error::InvalidToken)));
}

#[test]
fn test_expired_token_rejection() {
    // Issued 11 hours ago with a 10 hour lifetime
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: 3,
        iat: now - 11 * 3600,
        exp: now - 3600,
    };
    let token = sign_claims(&claims, SECRET).expect("Failed to sign claims");

    let result = validate_token(&token, SECRET);
    assert!(matches!(result, Err(Error::ExpiredToken)));
}

#[test]
fn test_tokens_for_different_users_differ() {
    let token1 = issue_token(1, SECRET, 10).expect("Failed to issue token");
    let token2 = issue_token(2, SECRET, 10).expect("Failed to issue token");
    assert_ne!(token1, token2);

    let claims1 = validate_token(&token1, SECRET).expect("Failed to validate token");
    let claims2 = validate_token(&token2, SECRET).expect("Failed to validate token");
    assert_eq!(claims1.sub, 1);
    assert_eq!(claims2.sub, 2);
}

#[tokio::test]
async fn test_revoked_token_stays_revoked() {
    let registry = RevocationRegistry::new();
    let token = issue_token(1, SECRET, 10).expect("Failed to issue token");

    // Valid until revoked, even though the signature never expires early
    assert!(!registry.is_revoked(&token).await);
    assert!(validate_token(&token, SECRET).is_ok());

    registry.revoke(token.clone()).await;

    assert!(registry.is_revoked(&token).await);
    // The signature itself is still fine; the registry is what rejects it
    assert!(validate_token(&token, SECRET).is_ok());
}

#[tokio::test]
async fn test_revoking_one_token_does_not_cascade() {
    let registry = RevocationRegistry::new();

    // Two sessions for the same user
    let now = chrono::Utc::now().timestamp();
    let first = sign_claims(
        &Claims {
            sub: 1,
            iat: now - 60,
            exp: now + 3600,
        },
        SECRET,
    )
    .expect("Failed to sign claims");
    let second = sign_claims(
        &Claims {
            sub: 1,
            iat: now,
            exp: now + 3600,
        },
        SECRET,
    )
    .expect("Failed to sign claims");

    registry.revoke(first.clone()).await;

    assert!(registry.is_revoked(&first).await);
    assert!(!registry.is_revoked(&second).await);
}

#[tokio::test]
async fn test_registry_shared_across_clones() {
    let registry = RevocationRegistry::new();
    let clone = registry.clone();

    registry.revoke("token-a".to_string()).await;
    clone.revoke("token-b".to_string()).await;

    assert!(registry.is_revoked("token-b").await);
    assert!(clone.is_revoked("token-a").await);
    assert_eq!(registry.len().await, 2);
}

#[test]
fn test_password_hash_round_trip() {
    let hash = hash_password("pw123").expect("Failed to hash password");
    assert_ne!(hash, "pw123");
    assert!(bcrypt::verify("pw123", &hash).expect("Failed to verify"));
    assert!(!bcrypt::verify("pw124", &hash).expect("Failed to verify"));
}

#[test]
fn test_password_hashes_are_salted() {
    let hash1 = hash_password("pw123").expect("Failed to hash password");
    let hash2 = hash_password("pw123").expect("Failed to hash password");
    assert_ne!(hash1, hash2);
}
