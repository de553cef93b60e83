//! Authentication, token issuance and revocation

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod revocation;

pub use jwt::{issue_token, sign_claims, validate_token, Claims};
pub use middleware::{extract_token, require_auth, BearerToken, CurrentUser};
pub use models::{hash_password, LoginRequest, LoginResponse, RegisterRequest, User, UserInfo};
pub use revocation::RevocationRegistry;
