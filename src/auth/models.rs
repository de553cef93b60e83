//! Authentication models and request/response types

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// User identity record from the credential store.
///
/// Deliberately does not implement `Serialize`: the password hash must never
/// reach a client. Use [`UserInfo`] for responses.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    /// Username chosen at registration
    pub username: String,
    /// Unique email, used for login
    pub email: String,
    /// Salted bcrypt hash of the password
    pub password_hash: String,
    /// When the account was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// Check a plaintext password against the stored hash
    pub fn verify_password(&self, password: &str) -> Result<bool> {
        Ok(bcrypt::verify(password, &self.password_hash)?)
    }
}

/// Hash a plaintext password with a salted one-way hash
pub fn hash_password(password: &str) -> Result<String> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Public user profile in responses
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Registration payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response with token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Login settings update payload
#[derive(Debug, Deserialize)]
pub struct SettingsRequest {
    pub current_password: Option<String>,
    pub email: Option<String>,
    pub new_password: Option<String>,
}

/// Treat missing and empty strings the same way, as absent
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_omits_password_hash() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: chrono::Utc::now(),
        };
        let info = UserInfo::from(&user);
        let json = serde_json::to_string(&info).expect("Failed to serialize");

        assert!(json.contains("alice"));
        assert!(!json.contains("password"));
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("pw123").expect("Failed to hash");
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: hash,
            created_at: chrono::Utc::now(),
        };
        assert!(user.verify_password("pw123").expect("verify failed"));
        assert!(!user.verify_password("wrong").expect("verify failed"));
    }
}
